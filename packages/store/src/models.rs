//! # Domain models for users and the form draft
//!
//! Defines the records held by [`crate::UserStore`] and the transient draft the
//! form edits before it is committed.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Identity of a user record. Supplied by the remote source for loaded users, assigned by the store for inserted ones. |
//! | [`UserRecord`] | A single user: identity plus `name`, `email` and `phone`. Deserialises straight from the remote JSON; unknown fields are ignored and missing text fields default to empty. |
//! | [`Draft`] | The in-progress form record. Same text fields as a [`UserRecord`] but never an identity. |
//! | [`DraftField`] | Names one of the three draft fields. Parsed from the input element's `name` attribute. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user held in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl UserRecord {
    /// Build a record from an identity and the draft's fields.
    pub fn from_draft(id: UserId, draft: Draft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        }
    }

    /// Copy this record's text fields into a fresh draft.
    pub fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Overwrite the text fields with the draft's, keeping the identity.
    pub fn merge(&mut self, draft: Draft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
    }
}

/// The in-progress form record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Read one field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// One of the editable draft fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Email,
    Phone,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Email, DraftField::Phone];

    /// The form input `name`/`id` for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
        }
    }

    /// Human label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name is not one of `name`, `email`, `phone`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown draft field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "email" => Ok(DraftField::Email),
            "phone" => Ok(DraftField::Phone),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442"
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, UserId(1));
        assert_eq!(record.name, "Leanne Graham");
        assert_eq!(record.email, "Sincere@april.biz");
        assert_eq!(record.phone, "1-770-736-8031 x56442");
    }

    #[test]
    fn test_record_missing_text_fields_default_to_empty() {
        let record: UserRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.id, UserId(7));
        assert!(record.to_draft().is_empty());
    }

    #[test]
    fn test_negative_id_does_not_drop_array() {
        let json = r#"[
            {"id": 1, "name": "Ann", "email": "a@x.com", "phone": "1"},
            {"id": -5, "name": "Neg", "email": "n@x.com", "phone": "2"}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId(1));
        assert_eq!(users[1].id, UserId(-5));
        assert_eq!(users[1].name, "Neg");
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        assert!(serde_json::from_str::<UserRecord>(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_draft_field_parse() {
        assert_eq!("name".parse::<DraftField>(), Ok(DraftField::Name));
        assert_eq!("email".parse::<DraftField>(), Ok(DraftField::Email));
        assert_eq!("phone".parse::<DraftField>(), Ok(DraftField::Phone));
        assert_eq!(
            "id".parse::<DraftField>(),
            Err(UnknownField("id".to_string()))
        );

        for field in DraftField::ALL {
            assert_eq!(field.as_str().parse::<DraftField>(), Ok(field));
        }
    }

    #[test]
    fn test_draft_set_and_get() {
        let mut draft = Draft::default();
        assert!(draft.is_empty());

        draft.set(DraftField::Email, "a@x.com");
        assert_eq!(draft.get(DraftField::Email), "a@x.com");
        assert_eq!(draft.get(DraftField::Name), "");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_merge_keeps_identity() {
        let mut record = UserRecord::from_draft(UserId(3), Draft::new("Ann", "a@x.com", "1"));
        record.merge(Draft::new("Bea", "b@x.com", "2"));
        assert_eq!(record.id, UserId(3));
        assert_eq!(record.to_draft(), Draft::new("Bea", "b@x.com", "2"));
    }
}
