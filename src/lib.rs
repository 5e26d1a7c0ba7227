//! Kelvin: a private wellness companion with a daily quest, a chat with the
//! Kelvin assistant, and a journal that never leaves the device.

pub mod api;
pub mod config;
pub mod journal;
pub mod quest;
pub mod storage;
pub mod transcript;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
