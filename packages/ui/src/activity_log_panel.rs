use dioxus::prelude::*;

use crate::activity_log::{LogFilter, LogLevel, use_activity_log};
use crate::Icon;
use crate::icons::{FaTriangleExclamation, FaXmark};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Diagnostics for the page: the initial load outcome and the operator's
/// commits. Entries are kept for the session; the panel only filters them.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let current = log().filter;
    let shown = log().shown();
    let total = log().entries.len();
    let shown_count = shown.len();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        section {
            class: "activity-log-panel",
            "aria-label": "Diagnostics",
            header {
                class: "activity-log-header",
                span { class: "activity-log-title", "Diagnostics ({shown_count}/{total})" }
                div {
                    class: "activity-log-filters",
                    for filter in [LogFilter::All, LogFilter::Problems] {
                        button {
                            r#type: "button",
                            class: if filter == current { "activity-log-filter active" } else { "activity-log-filter" },
                            onclick: move |_| log.write().filter = filter,
                            "{filter.label()}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "activity-log-close",
                        "aria-label": "Close diagnostics",
                        onclick: move |_| log.write().visible = false,
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            if shown.is_empty() {
                p { class: "activity-log-empty", "Nothing to show" }
            } else {
                ul {
                    class: "activity-log-entries",
                    for entry in shown {
                        li {
                            class: format!("activity-log-entry {}", entry.level.as_str()),
                            time { class: "activity-log-time", "{entry.timestamp}" }
                            if entry.level == LogLevel::Error {
                                Icon { class: "activity-log-icon", icon: FaTriangleExclamation, width: 10, height: 10 }
                            }
                            span { "{entry.message}" }
                        }
                    }
                }
            }
        }
    }
}

/// Small corner button that opens the panel. Shows the entry count but never
/// highlights errors, so a failed load stays out of the operator's way.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let label = if log().visible { "Hide diagnostics" } else { "Show diagnostics" };

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        button {
            r#type: "button",
            class: "activity-log-toggle",
            "aria-label": label,
            title: label,
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            if count > 0 { "{count}" } else { "Log" }
        }
    }
}
