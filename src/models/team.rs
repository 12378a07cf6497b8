// hackhub-service/src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

// Team model. The first member is, by convention, the creator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub hackathon_id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub members: Vec<User>,
    pub max_members: u32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

// Request to create a new team
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub hackathon_id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub max_members: u32,
}

impl Team {
    // Create a team with the creator as its founding member
    pub fn new(creator: User, data: CreateTeamRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            hackathon_id: data.hackathon_id,
            name: data.name,
            description: data.description,
            tags: data.tags,
            created_by: creator.id.clone(),
            members: vec![creator],
            max_members: data.max_members,
            created_at: Utc::now(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.members.len() as u32 >= self.max_members
    }

    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }
}
