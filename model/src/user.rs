//! Signed-in user profile as issued by the identity provider.

use serde::{Deserialize, Serialize};

/// Opaque identity carried by a session.
///
/// Every field is optional because providers may withhold any of them. `id`
/// is the provider subject and is what the backend keys stored data on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub id: Option<String>,
}

impl User {
    /// Name shown in greetings, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("there")
    }

    /// Provider subject, if present and non-empty.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name_then_email() {
        let mut user = User {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            ..User::default()
        };
        assert_eq!(user.display_name(), "Ada");

        user.name = Some("  ".into());
        assert_eq!(user.display_name(), "ada@example.com");

        user.email = None;
        assert_eq!(user.display_name(), "there");
    }

    #[test]
    fn user_id_ignores_empty_subject() {
        let user = User { id: Some(String::new()), ..User::default() };
        assert_eq!(user.user_id(), None);

        let user = User { id: Some("1089".into()), ..User::default() };
        assert_eq!(user.user_id(), Some("1089"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(user.email.as_deref(), Some("a@b.c"));
        assert!(user.name.is_none());
        assert!(user.id.is_none());
    }
}
