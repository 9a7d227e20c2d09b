use dioxus::prelude::*;
use store::UsersConfig;

#[component]
pub fn Users() -> Element {
    let config = use_context::<UsersConfig>();

    rsx! {
        ui::views::UserManagementView { config }
    }
}
