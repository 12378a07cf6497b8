// hackhub-service/src/models/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Invitation;

// User profile. Invitations live on the user as a back-reference list.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub tags: Vec<String>,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub invitations: Vec<Invitation>,
    // Internal only: never serialized out
    #[serde(default, skip_serializing)]
    pub password_hash: Option<String>,
}

// Profile fields a user may edit. Password hash and invitations are not
// touchable through this request.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub bio: String,
    pub tags: Vec<String>,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl User {
    // Snapshot suitable for embedding in a team's member list: carries the
    // profile, not the owner's invitations or credentials
    pub fn as_member(&self) -> User {
        let mut member = self.clone();
        member.invitations = Vec::new();
        member.password_hash = None;
        member
    }

    // Create a fresh user at registration time
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            bio: String::new(),
            tags: Vec::new(),
            photo_url: String::new(),
            created_at: Utc::now(),
            location: None,
            github: None,
            website: None,
            skills: None,
            invitations: Vec::new(),
            password_hash: Some(password_hash),
        }
    }
}
