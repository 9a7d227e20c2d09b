use dioxus::prelude::*;
use store::UserStore;

/// Consume the `Signal<UserStore>` provided by `UserManagementView`.
///
/// The view is the only owner of the store; the form, grid and cards read
/// through this signal and mutate it only via `UserStore` methods.
pub fn use_user_store() -> Signal<UserStore> {
    use_context::<Signal<UserStore>>()
}
