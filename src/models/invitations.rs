// hackhub-service/src/models/invitations.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Status for team invitations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InvitationStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "declined")]
    Declined,
}

// Team invitation model. Owned by the invited user; accepted and declined
// are terminal states.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

// Request to invite a user into a team
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub user_id: String,
}

impl Invitation {
    // Create a new pending invitation
    pub fn new(team_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_id,
            user_id,
            status: InvitationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }
}
