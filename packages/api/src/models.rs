//! Wire types shared with the CareerFlow REST service.
//!
//! The backing API serializes with camelCase property names, so every type
//! here carries a `rename_all` attribute rather than per-field renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned at login time.
///
/// This is a denormalized snapshot: it is persisted alongside the token and
/// is not re-fetched automatically, so a profile edit elsewhere only shows
/// up after the next login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub photo_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to show in the UI, falling back to the email when the profile
    /// name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile fields submitted by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Successful login payload: the bearer token, the user snapshot, and an
/// optional expiry the service may attach to the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Successful registration payload. Registration does not log the user in,
/// so no token comes back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_camel_case() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "name": "Ana Souza",
                "email": "ana@example.com",
                "photoPath": "/photos/u1.png",
                "createdAt": "2024-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.photo_path.as_deref(), Some("/photos/u1.png"));
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Ana","email":"ana@example.com","createdAt":"2024-06-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ana");
        user.name = "  ".to_string();
        assert_eq!(user.display_name(), "ana@example.com");
    }

    #[test]
    fn test_register_request_omits_empty_optionals() {
        let request = RegisterRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
            city: None,
            state: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("city"));
    }
}
