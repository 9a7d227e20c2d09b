pub mod config;
pub mod loader;
pub mod models;
pub mod theme;
pub mod users;
pub mod validation;

pub use config::UsersConfig;
pub use loader::{fetch_initial, UserSource};
pub use models::{Draft, DraftField, UnknownField, UserId, UserRecord};
pub use theme::Theme;
pub use users::{Commit, LoadStatus, Mode, UserStore};
pub use validation::FieldErrors;
