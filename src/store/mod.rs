// hackhub-service/src/store/mod.rs
//
// Data access capability for the service. One trait, two backends selected at
// construction time: the seeded in-memory mock dataset, or a thin client
// against an upstream ХакХаб API. The chosen store is built once in main and
// passed by reference to every consumer.
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

use crate::models::{
    CreateHackathonRequest, CreateTeamRequest, Hackathon, Invitation, ServiceError, Team,
    UpdateProfileRequest, User,
};
use crate::services::search::TimeTab;

pub mod memory;
pub mod rest;
pub mod seed;
pub mod session;

pub use memory::MemoryStore;
pub use rest::RestStore;
pub use session::ApiSession;

#[async_trait]
pub trait HackHubStore: Send + Sync {
    // Hackathon directory
    async fn search_hackathons(
        &self,
        query: &str,
        tags: &[String],
        tab: TimeTab,
    ) -> Result<Vec<Hackathon>, ServiceError>;
    async fn find_hackathon_by_id(&self, id: &str) -> Result<Option<Hackathon>, ServiceError>;
    async fn create_hackathon(
        &self,
        data: CreateHackathonRequest,
    ) -> Result<Hackathon, ServiceError>;

    // Membership registry
    async fn list_teams(&self) -> Result<Vec<Team>, ServiceError>;
    async fn teams_for_hackathon(&self, hackathon_id: &str) -> Result<Vec<Team>, ServiceError>;
    async fn find_team_by_id(&self, id: &str) -> Result<Option<Team>, ServiceError>;
    async fn create_team(
        &self,
        creator_id: &str,
        data: CreateTeamRequest,
    ) -> Result<Team, ServiceError>;
    async fn join_team(&self, team_id: &str, user_id: &str) -> Result<Team, ServiceError>;
    async fn leave_team(&self, team_id: &str, user_id: &str) -> Result<Team, ServiceError>;

    // User directory
    async fn search_users(
        &self,
        query: &str,
        tags: &[String],
        without_team: bool,
    ) -> Result<Vec<User>, ServiceError>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, ServiceError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;
    async fn create_user(&self, user: User) -> Result<User, ServiceError>;
    async fn update_profile(
        &self,
        user_id: &str,
        data: UpdateProfileRequest,
    ) -> Result<User, ServiceError>;

    // Invitation tracker
    async fn invite_user_to_team(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<Invitation, ServiceError>;
    async fn pending_invitations(&self, user_id: &str) -> Result<Vec<Invitation>, ServiceError>;
    async fn respond_to_invitation(
        &self,
        user_id: &str,
        team_id: &str,
        accept: bool,
    ) -> Result<Invitation, ServiceError>;
}

// Select the backing store from the environment
pub fn build_store_from_env() -> Result<Arc<dyn HackHubStore>, ServiceError> {
    let backend = env::var("HACKHUB_BACKEND").unwrap_or_else(|_| "memory".to_string());

    match backend.as_str() {
        "memory" => Ok(Arc::new(MemoryStore::with_seed_data())),
        "rest" => {
            let base_url = env::var("HACKHUB_UPSTREAM_URL").map_err(|_| {
                ServiceError::BadRequest(
                    "HACKHUB_UPSTREAM_URL must be set for the rest backend".to_string(),
                )
            })?;
            let session_file = env::var("HACKHUB_SESSION_FILE")
                .unwrap_or_else(|_| format!("./storage/{}.json", session::SESSION_NAMESPACE));
            Ok(Arc::new(RestStore::new(ApiSession::new(
                base_url,
                session_file.into(),
            ))))
        }
        other => Err(ServiceError::BadRequest(format!(
            "Unknown backend: {}. Must be 'memory' or 'rest'",
            other
        ))),
    }
}
