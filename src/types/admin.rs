//! Administrator account types

use crate::core::traits::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role reported for every administrator
pub const ADMIN_ROLE: &str = "ADMIN";

/// Stored administrator account
///
/// Username and email are each unique among administrators. Only active
/// administrators are found by the username lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    #[serde(alias = "isActive")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Admin {
    const KIND: &'static str = "Admin";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp(&mut self, now: DateTime<Utc>, created: bool) {
        if created {
            self.created_at = now;
        }
        self.updated_at = now;
    }
}

/// Candidate administrator submitted to create or update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminInput {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl AdminInput {
    pub fn new(username: &str, email: &str, full_name: &str) -> Self {
        AdminInput {
            id: None,
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            full_name: Some(full_name.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_input_accepts_camel_case_json() {
        let input: AdminInput = serde_json::from_str(
            r#"{"username":"admin","email":"admin@gamezone.com","fullName":"GameZone Administrator"}"#,
        )
        .unwrap();

        assert_eq!(input, AdminInput::new("admin", "admin@gamezone.com", "GameZone Administrator"));
    }
}
