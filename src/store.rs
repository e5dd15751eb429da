//! Edit Draft Store
//!
//! Users edit form state. Uses reactive_stores so each input only tracks
//! its own field.

use reactive_stores::Store;

use crate::error::DraftError;
use crate::models::{User, UserUpdate};

/// Editable copy of a user, as form text
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub team: String,
    pub age: String,
}

impl UserDraft {
    /// Seed from the record's current values
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            team: user.team.clone().unwrap_or_default(),
            age: user.age.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    /// Validate and build the `PUT` body. Blank age becomes `null`.
    pub fn to_update(&self) -> Result<UserUpdate, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }
        let age = match self.age.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| DraftError::InvalidAge(raw.to_string()))?,
            ),
        };
        Ok(UserUpdate {
            name: name.to_string(),
            email: email.to_string(),
            team: self.team.trim().to_string(),
            age,
        })
    }
}

/// Type alias for the draft store
pub type DraftStore = Store<UserDraft>;

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: 1,
            name: Some("Ada".to_string()),
            email: Some("a@x.com".to_string()),
            team: Some("Red".to_string()),
            age: Some(30),
        }
    }

    #[test]
    fn test_draft_round_trips_user_fields() {
        let draft = UserDraft::from_user(&ada());
        assert_eq!(draft.age, "30");
        assert_eq!(
            draft.to_update(),
            Ok(UserUpdate {
                name: "Ada".to_string(),
                email: "a@x.com".to_string(),
                team: "Red".to_string(),
                age: Some(30),
            })
        );
    }

    #[test]
    fn test_edit_changes_only_draft() {
        let user = ada();
        let mut draft = UserDraft::from_user(&user);
        draft.team = "Blue".to_string();
        assert_eq!(draft.to_update().map(|u| u.team), Ok("Blue".to_string()));
        assert_eq!(user.team.as_deref(), Some("Red"));
    }

    #[test]
    fn test_blank_age_is_null() {
        let mut draft = UserDraft::from_user(&ada());
        draft.age = "  ".to_string();
        assert_eq!(draft.to_update().map(|u| u.age), Ok(None));
    }

    #[test]
    fn test_validation_errors() {
        let mut draft = UserDraft::from_user(&ada());
        draft.age = "thirty".to_string();
        assert_eq!(draft.to_update(), Err(DraftError::InvalidAge("thirty".to_string())));

        draft.age = "-3".to_string();
        assert!(matches!(draft.to_update(), Err(DraftError::InvalidAge(_))));

        draft.name = " ".to_string();
        assert_eq!(draft.to_update(), Err(DraftError::MissingName));
    }

    #[test]
    fn test_negative_stored_age_must_be_fixed_before_saving() {
        let mut user = ada();
        user.age = Some(-4);
        let draft = UserDraft::from_user(&user);
        assert_eq!(draft.age, "-4");
        assert_eq!(draft.to_update(), Err(DraftError::InvalidAge("-4".to_string())));
    }

    #[test]
    fn test_update_payload_shape() {
        let body = serde_json::to_value(UserDraft::from_user(&ada()).to_update().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ada", "email": "a@x.com", "team": "Red", "age": 30})
        );
    }
}
