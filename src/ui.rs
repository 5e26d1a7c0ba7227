use crate::api::{HttpApi, WellnessApi};
use crate::config::Config;
use crate::views::{ChatView, DashboardView, JournalView};
use dioxus::prelude::*;
use std::rc::Rc;

const KELVIN_CSS: Asset = asset!("/assets/kelvin.css");

/// Shared handles provided to every view.
#[derive(Clone)]
pub struct AppServices {
    pub api: Rc<dyn WellnessApi>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Quest,
    Chat,
    Journal,
}

struct NavItem {
    tab: AppTab,
    label: &'static str,
    short_label: &'static str,
    icon: &'static [&'static str],
}

static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        tab: AppTab::Quest,
        label: "Today's Quest",
        short_label: "Quest",
        icon: &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
    },
    NavItem {
        tab: AppTab::Chat,
        label: "Chat",
        short_label: "Chat",
        icon: &[
            "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
        ],
    },
    NavItem {
        tab: AppTab::Journal,
        label: "Journal",
        short_label: "Journal",
        icon: &[
            "M3 7v10a2 2 0 002 2h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2z",
            "M7 3v4M17 3v4",
        ],
    },
];

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = Config::load();
        tracing::info!(api_url = %config.api_url, "starting Kelvin");
        AppServices {
            api: Rc::new(HttpApi::new(&config)),
        }
    });
    let active_tab = use_signal(|| AppTab::Quest);

    rsx! {
        document::Title { "Kelvin" }
        document::Meta { name: "description", content: "Your private AI companion for mental wellness." }
        document::Link { rel: "stylesheet", href: KELVIN_CSS }
        div { class: "shell",
            Sidebar { active_tab }
            main { class: "content",
                ErrorBoundary {
                    handle_error: render_error,
                    ActivePanel { active_tab }
                }
            }
            BottomNav { active_tab }
        }
    }
}

/// Only the selected view is mounted, so switching away drops its state.
#[component]
fn ActivePanel(active_tab: Signal<AppTab>) -> Element {
    match active_tab() {
        AppTab::Quest => rsx! { DashboardView {} },
        AppTab::Chat => rsx! { ChatView {} },
        AppTab::Journal => rsx! { JournalView {} },
    }
}

fn render_error(errors: ErrorContext) -> Element {
    let message = errors
        .errors()
        .first()
        .map(ToString::to_string)
        .unwrap_or_default();
    tracing::error!(%message, "view failed to render");
    rsx! {
        div { class: "error-panel",
            h2 { class: "heading", "Something went wrong!" }
            p { "{message}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| errors.clear_errors(),
                "Try again"
            }
        }
    }
}

#[component]
fn Sidebar(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand", h1 { "Kelvin" } }
            nav { class: "sidebar-links",
                for item in NAV_ITEMS.iter() {
                    NavButton {
                        active_tab,
                        tab: item.tab,
                        label: item.label,
                        icon: item.icon,
                        class: "sidebar-link",
                    }
                }
            }
        }
    }
}

#[component]
fn BottomNav(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        nav { class: "bottom-nav",
            for item in NAV_ITEMS.iter() {
                NavButton {
                    active_tab,
                    tab: item.tab,
                    label: item.short_label,
                    icon: item.icon,
                    class: "bottom-link",
                }
            }
        }
    }
}

#[component]
fn NavButton(
    active_tab: Signal<AppTab>,
    tab: AppTab,
    label: &'static str,
    icon: &'static [&'static str],
    class: &'static str,
) -> Element {
    let mut active_tab = active_tab;
    let state = if active_tab() == tab { "active" } else { "" };
    rsx! {
        button {
            class: format_args!("{class} {state}"),
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            NavIcon { paths: icon }
            span { "{label}" }
        }
    }
}

#[component]
fn NavIcon(paths: &'static [&'static str]) -> Element {
    rsx! {
        svg {
            class: "nav-icon",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            for d in paths.iter() {
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "1.5",
                    d: *d,
                }
            }
        }
    }
}
