use dioxus::prelude::*;
use store::{fetch_initial, LoadStatus, UserStore, UsersConfig};

use crate::{
    ActivityLogPanel, ActivityLogToggle, ThemeToggle, UserForm, UserGrid,
    LogLevel, log_activity, use_activity_log, use_theme,
};

/// The single page: heading, theme toggle, add/edit form and card grid.
///
/// Owns the `Signal<UserStore>` for its subtree and runs the initial load once
/// on mount. A failed load is logged and otherwise ignored; the page simply
/// starts with an empty collection. If the view is dropped before the request
/// finishes, the pending task is dropped with it.
#[component]
pub fn UserManagementView(config: UsersConfig) -> Element {
    let mut users = use_context_provider(|| Signal::new(UserStore::new()));
    let mut activity_log = use_activity_log();
    let theme = use_theme();

    let _loader = use_resource(move || {
        let config = config.clone();
        async move {
            let status = users.peek().load_status();
            let fetched = match api::UsersClient::from_config(&config) {
                Ok(client) => fetch_initial(status, &client).await,
                Err(e) => Some(Err(e)),
            };
            let Some(result) = fetched else {
                return;
            };
            let failure = result.as_ref().err().map(|e| e.to_string());
            let status = users.write().apply_loaded(result);
            match (status, failure) {
                (LoadStatus::Loaded(count), _) => {
                    log_activity(&mut activity_log, LogLevel::Info, &format!("Loaded {count} users"));
                }
                (LoadStatus::Failed, Some(e)) => {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Error fetching users: {e}"));
                }
                _ => {}
            }
        }
    });

    let page_class = format!("user-management theme-{}", theme().as_str());

    rsx! {
        div {
            class: page_class,
            div {
                class: "user-management-inner",
                div {
                    class: "user-management-header",
                    h1 { class: "user-management-title", "User Management" }
                    ThemeToggle {}
                }
                UserForm {}
                UserGrid {}
            }
            ActivityLogToggle {}
            ActivityLogPanel {}
        }
    }
}
