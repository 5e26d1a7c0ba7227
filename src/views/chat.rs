use crate::api::WellnessApi;
use crate::transcript::ChatTranscript;
use crate::types::{ChatMessage, Role};
use crate::ui::AppServices;
use crate::views::shared::reply_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;

const SCROLL_TO_LATEST: &str = r#"
const list = document.getElementById("chat-list");
if (list) { list.scrollTo({ top: list.scrollHeight, behavior: "smooth" }); }
"#;

#[component]
pub fn ChatView() -> Element {
    let services = use_context::<AppServices>();
    let api = use_hook(|| services.api.clone());
    let transcript = use_signal(ChatTranscript::new);
    let mut input = use_signal(String::new);

    use_effect(move || {
        // Re-run whenever a message lands or the loading flag flips.
        let _ = transcript.with(|t| (t.messages().len(), t.is_loading()));
        let _ = document::eval(SCROLL_TO_LATEST);
    });

    // Captures only signals, so both handlers get their own copy.
    let mut send_message = {
        let mut transcript = transcript;
        let mut input_signal = input;
        move |client: Rc<dyn WellnessApi>, text: String| {
            let Some(turn) = transcript.with_mut(|t| t.begin_send(&text)) else {
                return;
            };
            input_signal.set(String::new());

            spawn(async move {
                let outcome = client.chat(&turn.message, &turn.history).await;
                transcript.with_mut(|t| t.finish_send(outcome));
            });
        }
    };

    let snapshot = transcript();
    let loading = snapshot.is_loading();

    rsx! {
        div { class: "chat-page",
            h1 { class: "heading heading-lg", "Chat with Kelvin" }
            div { class: "card chat-card",
                div { id: "chat-list", class: "chat-list",
                    if snapshot.is_empty() {
                        EmptyChat {}
                    } else {
                        for (i, msg) in snapshot.messages().iter().enumerate() {
                            MessageRow { key: "{i}", message: msg.clone() }
                        }
                    }
                    if loading {
                        div { class: "message-row model",
                            div { class: "bubble model",
                                p { class: "typing", "● ● ●" }
                            }
                        }
                    }
                }
                div { class: "composer",
                    input {
                        r#type: "text",
                        placeholder: "Type your message...",
                        value: "{input}",
                        disabled: loading,
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: {
                            let api = api.clone();
                            move |ev: KeyboardEvent| {
                                if ev.key() == Key::Enter {
                                    send_message(api.clone(), input());
                                }
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| send_message(api.clone(), input()),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let side = message.role.as_str();
    rsx! {
        div { class: "message-row {side}",
            div { class: "bubble {side}",
                {match message.role {
                    Role::User => rsx! { p { class: "plain", "{message.text}" } },
                    Role::Model => rsx! {
                        div { class: "md", dangerous_inner_html: reply_to_html(&message.text) }
                    },
                }}
            }
        }
    }
}

#[component]
fn EmptyChat() -> Element {
    rsx! {
        div { class: "empty-chat",
            div { class: "illustration muted", aria_hidden: "true", "💬" }
            h3 { class: "heading", "It's quiet here..." }
            p { class: "text-muted", "Say hello to start a conversation with Kelvin." }
        }
    }
}
