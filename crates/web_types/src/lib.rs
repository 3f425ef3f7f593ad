//! Wire types for the password-forge backend.
//!
//! These mirror the JSON bodies of `/generate`, `/save`, `/saved` and
//! `/delete/:id`. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Character classes to draw from when generating a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Include `A-Z`
    pub uppercase: bool,
    /// Include `a-z`
    pub lowercase: bool,
    /// Include `0-9`
    pub numbers: bool,
    /// Include punctuation such as `!@#$`
    pub special: bool,
}

impl GenerationOptions {
    /// True when at least one character class is selected.
    pub fn any_selected(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.special
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
        }
    }
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Number of characters to generate
    pub length: u32,
    /// Character classes to draw from
    pub options: GenerationOptions,
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Whether a password was generated
    pub success: bool,
    /// Generated password, present on success
    #[serde(default)]
    pub password: Option<String>,
    /// Reason for a refusal, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    /// Site the password belongs to (`siteName` on the wire)
    pub site_name: String,
    /// Password to store
    pub password: String,
}

/// Response of `POST /save` and `DELETE /delete/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Whether the action took effect
    pub success: bool,
    /// Reason for a refusal, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

/// One saved site/password record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPasswordEntry {
    /// Server-assigned, unique
    pub id: i64,
    /// Site the password belongs to
    pub site_name: String,
    /// Stored password in plain text
    pub password: String,
    /// Timestamp as sent by the server (ISO-8601)
    pub created_at: String,
}

/// Response of `GET /saved`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPasswordsResponse {
    /// Every saved entry, in server order
    #[serde(default)]
    pub passwords: Vec<SavedPasswordEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_shape() {
        let request = GenerationRequest {
            length: 12,
            options: GenerationOptions {
                uppercase: true,
                lowercase: true,
                numbers: false,
                special: false,
            },
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "length": 12,
                "options": {
                    "uppercase": true,
                    "lowercase": true,
                    "numbers": false,
                    "special": false
                }
            })
        );
    }

    #[test]
    fn test_any_selected() {
        let none = GenerationOptions {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        };
        assert!(!none.any_selected());
        assert!(GenerationOptions { numbers: true, ..none }.any_selected());
        assert!(GenerationOptions::default().any_selected());
    }

    #[test]
    fn test_save_request_uses_camel_case() {
        let request = SaveRequest {
            site_name: "github".to_string(),
            password: "hunter2".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("\"siteName\":\"github\""));
        assert!(!json.contains("site_name"));
    }

    #[test]
    fn test_generate_response_success_and_failure() {
        let ok: GenerateResponse =
            serde_json::from_str(r#"{"success":true,"password":"Ab3xyzQWErty"}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.password.as_deref(), Some("Ab3xyzQWErty"));
        assert!(ok.error.is_none());

        let failed: GenerateResponse =
            serde_json::from_str(r#"{"success":false,"error":"No character types selected"}"#)
                .unwrap();
        assert!(!failed.success);
        assert!(failed.password.is_none());
        assert_eq!(failed.error.as_deref(), Some("No character types selected"));
    }

    #[test]
    fn test_action_response_without_error_field() {
        let parsed: ActionResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();

        assert!(parsed.success);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_saved_passwords_response() {
        let json = r#"{
            "passwords": [
                {"id": 2, "siteName": "mail", "password": "p@ss", "createdAt": "2024-01-05T15:07:12.123456"},
                {"id": 1, "siteName": "bank", "password": "s3cret", "createdAt": "2024-01-04T09:00:00"}
            ]
        }"#;

        let parsed: SavedPasswordsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.passwords.len(), 2);
        assert_eq!(parsed.passwords[0].id, 2);
        assert_eq!(parsed.passwords[0].site_name, "mail");
        assert_eq!(parsed.passwords[1].created_at, "2024-01-04T09:00:00");
    }

    #[test]
    fn test_saved_passwords_response_missing_list() {
        let parsed: SavedPasswordsResponse = serde_json::from_str("{}").unwrap();

        assert!(parsed.passwords.is_empty());
    }
}
