pub mod chat;
pub mod journal;
pub mod quest;
pub mod shared;

pub use chat::ChatView;
pub use journal::JournalView;
pub use quest::DashboardView;
