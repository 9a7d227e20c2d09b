//! One-shot fetch of the initial user collection.
//!
//! [`UserSource`] is the seam between the domain and whatever fetches the
//! users (`api::UsersClient` over HTTP in the app, plain values in tests).
//! Loading is two steps: [`fetch_initial`] talks to the source, then
//! [`UserStore::apply_loaded`](crate::UserStore::apply_loaded) commits the
//! result. No borrow of the store is held while the request is in flight, so a
//! UI can keep the store in a signal and only take the write guard to commit.

use std::future::Future;

use crate::models::UserRecord;
use crate::users::LoadStatus;

/// Async source of the initial user collection.
pub trait UserSource {
    type Error: std::fmt::Display;

    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, Self::Error>>;
}

/// Fetch from `source` if the store is still waiting for its first load.
///
/// `status` is the store's
/// [`UserStore::load_status`](crate::UserStore::load_status) read before the
/// fetch.
/// Returns `None`, without calling the source, once a load has been applied.
pub async fn fetch_initial<S: UserSource>(
    status: LoadStatus,
    source: &S,
) -> Option<Result<Vec<UserRecord>, S::Error>> {
    if status != LoadStatus::Pending {
        tracing::debug!("Initial load already applied, skipping fetch");
        return None;
    }
    Some(source.fetch_users().await)
}
