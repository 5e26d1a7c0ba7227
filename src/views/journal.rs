use crate::journal::{JournalDraft, JournalStore, display_entry_date};
use crate::storage::{StorageError, platform_store};
use crate::types::{JournalEntry, Mood};
use dioxus::prelude::*;

const SAVE_FAILED_TEXT: &str = "Could not save your entry.";

#[component]
pub fn JournalView() -> Element {
    let mut journal = use_signal(|| JournalStore::try_open(platform_store()));
    let mut title = use_signal(String::new);
    let mut mood = use_signal(Mood::default);
    let mut text = use_signal(String::new);
    let mut save_failed = use_signal(|| false);

    let on_save = move |_| {
        let draft = JournalDraft::new(title(), mood(), text());
        let outcome = journal.with_mut(|opened| match opened {
            Ok(store) => store.save(&draft).map(|saved| saved.is_some()),
            Err(_) => Ok(false),
        });
        match outcome {
            Ok(true) => {
                title.set(String::new());
                mood.set(Mood::Neutral);
                text.set(String::new());
                save_failed.set(false);
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "failed to persist journal");
                save_failed.set(true);
            }
        }
    };

    // An unreadable store goes to the app's error boundary.
    let entries = journal.with(|opened| match opened {
        Ok(store) => Ok(store.entries().to_vec()),
        Err(err) => Err(StorageError::Unavailable(err.to_string())),
    })?;

    rsx! {
        div { class: "journal-page",
            h1 { class: "heading heading-lg", "Your Private Journal" }
            div { class: "card journal-editor",
                div { class: "editor-row",
                    input {
                        r#type: "text",
                        placeholder: "Entry Title",
                        value: "{title}",
                        oninput: move |ev| title.set(ev.value()),
                    }
                    select {
                        value: mood().label(),
                        onchange: move |ev| mood.set(Mood::from_label(&ev.value()).unwrap_or_default()),
                        for option_mood in Mood::ALL {
                            option {
                                value: option_mood.label(),
                                selected: option_mood == mood(),
                                "{option_mood}"
                            }
                        }
                    }
                }
                textarea {
                    placeholder: "Write your thoughts here...",
                    value: "{text}",
                    oninput: move |ev| text.set(ev.value()),
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    onclick: on_save,
                    "Save Entry"
                }
                if save_failed() {
                    p { class: "error-text", "{SAVE_FAILED_TEXT}" }
                }
            }

            h2 { class: "heading heading-md", "Past Entries" }
            div { class: "entry-list",
                if entries.is_empty() {
                    div { class: "empty-journal",
                        p { class: "text-muted", "You have no journal entries yet." }
                    }
                } else {
                    for entry in entries {
                        EntryCard { key: "{entry.date}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn EntryCard(entry: JournalEntry) -> Element {
    rsx! {
        div { class: "card entry-card",
            h3 { class: "heading entry-title",
                span { class: "entry-mood", title: entry.mood.label(), "{entry.mood.emoji()}" }
                "{entry.title}"
            }
            p { class: "entry-date", "{display_entry_date(&entry.date)}" }
            p { class: "entry-text", "{entry.text}" }
        }
    }
}
