use dioxus::prelude::*;
use store::{Commit, DraftField};

use crate::Icon;
use crate::icons::{FaEnvelope, FaPhone, FaUser};
use crate::{LogLevel, log_activity, use_activity_log, use_user_store};

/// Add/edit form bound to the store's draft.
///
/// Submitting always commits: the field error map is rendered but never
/// checked here.
#[component]
pub fn UserForm() -> Element {
    let mut users = use_user_store();
    let mut activity_log = use_activity_log();
    let editing = users.read().editing().is_some();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let message = match users.write().submit() {
            Commit::Inserted(id) => format!("Added user {id}"),
            Commit::Updated(id) => format!("Updated user {id}"),
        };
        log_activity(&mut activity_log, LogLevel::Success, &message);
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,
            div {
                class: "user-form-fields",
                for field in DraftField::ALL {
                    DraftInput { key: "{field}", field }
                }
            }
            button {
                r#type: "submit",
                class: "user-form-submit",
                if editing { "Update User" } else { "Add User" }
            }
        }
    }
}

#[component]
fn DraftInput(field: DraftField) -> Element {
    let mut users = use_user_store();
    let value = users.read().draft().get(field).to_string();
    let error = users.read().errors().get(field).map(str::to_string);

    let input_type = match field {
        DraftField::Name => "text",
        DraftField::Email => "email",
        DraftField::Phone => "tel",
    };

    rsx! {
        div {
            label {
                r#for: field.as_str(),
                class: "user-form-label",
                "{field.label()}"
            }
            div {
                class: "user-form-input-wrap",
                input {
                    id: field.as_str(),
                    name: field.as_str(),
                    r#type: input_type,
                    class: if error.is_some() { "user-form-input has-error" } else { "user-form-input" },
                    placeholder: "Enter {field}",
                    value: value,
                    oninput: move |evt: FormEvent| users.write().update_draft_field(field, evt.value()),
                }
                {field_icon(field)}
            }
            if let Some(ref message) = error {
                p { class: "user-form-error", "{message}" }
            }
        }
    }
}

fn field_icon(field: DraftField) -> Element {
    match field {
        DraftField::Name => rsx! {
            Icon { class: "user-form-icon", icon: FaUser, width: 14, height: 14 }
        },
        DraftField::Email => rsx! {
            Icon { class: "user-form-icon", icon: FaEnvelope, width: 14, height: 14 }
        },
        DraftField::Phone => rsx! {
            Icon { class: "user-form-icon", icon: FaPhone, width: 14, height: 14 }
        },
    }
}
