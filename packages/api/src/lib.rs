//! # API crate — remote source for the user list
//!
//! Everything that talks to the network lives here. The rest of the workspace
//! only sees [`store::UserSource`], which [`UsersClient`] implements.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`UsersClient`]: one `GET` to the configured endpoint, decoded into `store::UserRecord`s |
//! | [`config`] | Environment overrides (`USER_MANAGER_ENDPOINT`, `.env` via `dotenvy`) applied on top of `store::UsersConfig` |
//! | [`error`] | [`ApiError`], the failure type surfaced to the loader's log |

pub mod client;
pub mod config;
pub mod error;

pub use client::UsersClient;
pub use error::ApiError;
