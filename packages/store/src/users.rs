//! # UserStore — the in-memory owner of the user collection
//!
//! [`UserStore`] holds the list of [`UserRecord`]s, the form [`Draft`], the
//! optional editing target and the (inert) [`FieldErrors`] map. Every mutation
//! the UI performs goes through one of its methods; the UI keeps a single
//! instance inside a signal and never touches records directly.
//!
//! ## Modes
//!
//! The store is always in one of two [`Mode`]s:
//!
//! | Mode | Entered by | `submit` does |
//! |------|-----------|---------------|
//! | [`Mode::Composing`] | construction, any `submit` | [`insert`](UserStore::insert) the draft as a new record |
//! | [`Mode::Editing`] | [`begin_edit`](UserStore::begin_edit) on an existing record | [`update`](UserStore::update) the target with the draft |
//!
//! ## Identities
//!
//! Inserted records get an identity from the store's clock (wall-clock
//! milliseconds by default). The value is bumped past the last identity this
//! store issued and past any identity already present, so inserts never
//! collide even when several happen inside the same millisecond.

use crate::models::{Draft, DraftField, UserId, UserRecord};
use crate::validation::FieldErrors;

/// Source of raw identity values, in milliseconds since the Unix epoch.
pub type Clock = fn() -> i64;

/// Whether the next submit inserts or updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Composing,
    Editing(UserId),
}

/// Outcome of [`UserStore::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    Inserted(UserId),
    Updated(UserId),
}

/// Progress of the one-shot initial load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    /// The collection was replaced with this many records.
    Loaded(usize),
    /// The source failed; the collection was left as it was.
    Failed,
}

#[derive(Clone, Debug)]
pub struct UserStore {
    users: Vec<UserRecord>,
    draft: Draft,
    editing: Option<UserId>,
    errors: FieldErrors,
    load_status: LoadStatus,
    last_id: i64,
    clock: Clock,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::with_clock(current_timestamp_millis)
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that draws identities from `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            users: Vec::new(),
            draft: Draft::default(),
            editing: None,
            errors: FieldErrors::default(),
            load_status: LoadStatus::Pending,
            last_id: 0,
            clock,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<UserId> {
        self.editing
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(id) => Mode::Editing(id),
            None => Mode::Composing,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// Replace the whole collection. Draft and editing target are untouched.
    pub fn replace_all(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    /// Apply the result of the initial load.
    ///
    /// Only the first call has any effect. On success the collection is
    /// replaced; on failure the error is logged and the collection is kept.
    pub fn apply_loaded<E: std::fmt::Display>(
        &mut self,
        result: Result<Vec<UserRecord>, E>,
    ) -> LoadStatus {
        if self.load_status != LoadStatus::Pending {
            tracing::debug!("Ignoring repeated user load");
            return self.load_status;
        }
        self.load_status = match result {
            Ok(users) => {
                let count = users.len();
                tracing::info!("Loaded {count} users");
                self.replace_all(users);
                LoadStatus::Loaded(count)
            }
            Err(e) => {
                tracing::error!("Error fetching users: {e}");
                LoadStatus::Failed
            }
        };
        self.load_status
    }

    /// Overwrite one field of the draft.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Append `draft` as a new record and clear the draft.
    pub fn insert(&mut self, draft: Draft) -> UserId {
        let id = UserId(self.next_id());
        self.users.push(UserRecord::from_draft(id, draft));
        self.draft = Draft::default();
        tracing::debug!("Inserted user {id}");
        id
    }

    /// Merge `draft` into the first record with identity `id`, then clear the
    /// draft and the editing target. Returns whether a record was found.
    pub fn update(&mut self, id: UserId, draft: Draft) -> bool {
        let found = match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.merge(draft);
                true
            }
            None => false,
        };
        self.editing = None;
        self.draft = Draft::default();
        if found {
            tracing::debug!("Updated user {id}");
        } else {
            tracing::warn!("Update target {id} no longer exists");
        }
        found
    }

    /// Remove the record with identity `id`. Absent identities are a no-op.
    pub fn delete(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() != before;
        if removed {
            tracing::debug!("Deleted user {id}");
        }
        removed
    }

    /// Load record `id` into the draft and make it the editing target.
    /// Returns `false`, changing nothing, when no such record exists.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(user) = self.get(id) else {
            return false;
        };
        let draft = user.to_draft();
        self.draft = draft;
        self.editing = Some(id);
        true
    }

    /// Commit the draft: update the editing target if there is one,
    /// otherwise insert a new record. Always leaves the store composing.
    pub fn submit(&mut self) -> Commit {
        let draft = std::mem::take(&mut self.draft);
        match self.editing {
            Some(id) => {
                self.update(id, draft);
                Commit::Updated(id)
            }
            None => Commit::Inserted(self.insert(draft)),
        }
    }

    fn next_id(&mut self) -> i64 {
        let mut candidate = (self.clock)().max(self.last_id.saturating_add(1));
        while self.contains(UserId(candidate)) {
            candidate = candidate.saturating_add(1);
        }
        self.last_id = candidate;
        candidate
    }
}

/// Milliseconds since the Unix epoch.
pub fn current_timestamp_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
