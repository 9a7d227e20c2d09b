//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::load_config;
#[cfg(not(target_arch = "wasm32"))]
pub use config::config_path;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod user_store;
pub use user_store::use_user_store;

mod user_form;
pub use user_form::UserForm;

mod user_card;
pub use user_card::{UserCard, UserGrid};

mod theme_toggle;
pub use theme_toggle::{ThemeSignal, ThemeToggle, use_theme};

pub mod activity_log;
pub use activity_log::{ActivityLog, LogFilter, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
