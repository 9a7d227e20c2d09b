use dioxus::prelude::*;
use store::{UserId, UserRecord};

use crate::Icon;
use crate::icons::{FaPenToSquare, FaTrash};
use crate::{LogLevel, log_activity, use_activity_log, use_user_store};

#[component]
pub fn UserCard(
    user: UserRecord,
    on_edit: EventHandler<UserId>,
    on_delete: EventHandler<UserId>,
) -> Element {
    let id = user.id;

    rsx! {
        div {
            class: "user-card",
            h2 { class: "user-card-name", "{user.name}" }
            p { class: "user-card-detail", "{user.email}" }
            p { class: "user-card-detail user-card-detail-last", "{user.phone}" }
            div {
                class: "user-card-actions",
                button {
                    r#type: "button",
                    class: "user-card-edit",
                    "aria-label": "Edit user",
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    r#type: "button",
                    class: "user-card-delete",
                    "aria-label": "Delete user",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

/// Card grid over the whole collection.
#[component]
pub fn UserGrid() -> Element {
    let mut users = use_user_store();
    let mut activity_log = use_activity_log();
    let records = users.read().users().to_vec();

    let handle_edit = move |id: UserId| {
        if users.write().begin_edit(id) {
            log_activity(&mut activity_log, LogLevel::Info, &format!("Editing user {id}"));
        }
    };

    let handle_delete = move |id: UserId| {
        if users.write().delete(id) {
            log_activity(&mut activity_log, LogLevel::Info, &format!("Deleted user {id}"));
        }
    };

    rsx! {
        div {
            class: "user-grid",
            for user in records {
                UserCard {
                    key: "{user.id}",
                    user: user.clone(),
                    on_edit: handle_edit,
                    on_delete: handle_delete,
                }
            }
        }
    }
}
