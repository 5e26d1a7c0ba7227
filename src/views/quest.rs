use crate::quest::{QuestBoard, QuestStatus};
use crate::ui::AppServices;
use dioxus::prelude::*;

#[component]
pub fn DashboardView() -> Element {
    let services = use_context::<AppServices>();
    let mut board = use_signal(QuestBoard::new);

    // One request per mount.
    use_future(move || {
        let api = services.api.clone();
        async move {
            let outcome = api.today_quest().await;
            board.with_mut(|b| b.apply(outcome));
        }
    });

    let snapshot = board();
    let completed = snapshot.is_completed();
    let headline_class = match (snapshot.status(), completed) {
        (QuestStatus::Failed, _) => "quest-text failed",
        (_, true) => "quest-text done",
        _ => "quest-text",
    };

    rsx! {
        div { class: "dashboard",
            h1 { class: "heading heading-xl", "Welcome to Kelvin" }
            p { class: "text-muted lead", "Your space to reflect, grow, and be heard." }
            div { class: "illustration", aria_hidden: "true", "🌱" }
            div { class: "card quest-card",
                h2 { class: "heading", "Today's Quest" }
                p { class: headline_class, "{snapshot.headline()}" }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    disabled: completed,
                    onclick: move |_| {
                        board.with_mut(|b| b.complete());
                    },
                    if completed { "Quest Completed!" } else { "Mark as Complete" }
                }
            }
        }
    }
}
