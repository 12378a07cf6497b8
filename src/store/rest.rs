// hackhub-service/src/store/rest.rs
//
// HTTP-backed store: the thin REST client variant. Each operation maps onto
// one conventional JSON endpoint of an upstream ХакХаб API; authentication
// and the 401 refresh-and-replay live in ApiSession. Authorization decisions
// belong to the upstream: operations act under the session identity.
use async_trait::async_trait;
use serde_json::json;

use crate::models::{
    CreateHackathonRequest, CreateInvitationRequest, CreateTeamRequest, Hackathon, Invitation,
    ServiceError, Team, UpdateProfileRequest, User,
};
use crate::services::search::TimeTab;
use crate::store::{ApiSession, HackHubStore};

pub struct RestStore {
    session: ApiSession,
}

impl RestStore {
    pub fn new(session: ApiSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ApiSession {
        &self.session
    }

    fn param(key: &str, value: impl Into<String>) -> (String, String) {
        (key.to_string(), value.into())
    }
}

#[async_trait]
impl HackHubStore for RestStore {
    async fn search_hackathons(
        &self,
        query: &str,
        tags: &[String],
        tab: TimeTab,
    ) -> Result<Vec<Hackathon>, ServiceError> {
        let mut params = Vec::new();
        if !query.is_empty() {
            params.push(Self::param("query", query));
        }
        if !tags.is_empty() {
            params.push(Self::param("tags", tags.join(",")));
        }
        params.push(Self::param("tab", tab.as_str()));

        self.session.get_json("/hackathons", &params).await
    }

    async fn find_hackathon_by_id(&self, id: &str) -> Result<Option<Hackathon>, ServiceError> {
        match self
            .session
            .get_json(&format!("/hackathons/{}", id), &[])
            .await
        {
            Ok(hackathon) => Ok(Some(hackathon)),
            Err(ServiceError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_hackathon(
        &self,
        data: CreateHackathonRequest,
    ) -> Result<Hackathon, ServiceError> {
        self.session.post_json("/hackathons", &data).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ServiceError> {
        self.session.get_json("/teams", &[]).await
    }

    async fn teams_for_hackathon(&self, hackathon_id: &str) -> Result<Vec<Team>, ServiceError> {
        let params = vec![Self::param("hackathonId", hackathon_id)];
        self.session.get_json("/teams", &params).await
    }

    async fn find_team_by_id(&self, id: &str) -> Result<Option<Team>, ServiceError> {
        match self.session.get_json(&format!("/teams/{}", id), &[]).await {
            Ok(team) => Ok(Some(team)),
            Err(ServiceError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // The upstream derives the creator from the session identity
    async fn create_team(
        &self,
        _creator_id: &str,
        data: CreateTeamRequest,
    ) -> Result<Team, ServiceError> {
        self.session.post_json("/teams", &data).await
    }

    async fn join_team(&self, team_id: &str, user_id: &str) -> Result<Team, ServiceError> {
        self.session
            .post_json(
                &format!("/teams/{}/members/{}", team_id, user_id),
                &json!({}),
            )
            .await
    }

    async fn leave_team(&self, team_id: &str, user_id: &str) -> Result<Team, ServiceError> {
        self.session
            .delete_json(&format!("/teams/{}/members/{}", team_id, user_id))
            .await
    }

    async fn search_users(
        &self,
        query: &str,
        tags: &[String],
        without_team: bool,
    ) -> Result<Vec<User>, ServiceError> {
        let mut params = Vec::new();
        if !query.is_empty() {
            params.push(Self::param("query", query));
        }
        if !tags.is_empty() {
            params.push(Self::param("tags", tags.join(",")));
        }
        if without_team {
            params.push(Self::param("withoutTeam", "true"));
        }

        self.session.get_json("/users", &params).await
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, ServiceError> {
        match self.session.get_json(&format!("/users/{}", id), &[]).await {
            Ok(user) => Ok(Some(user)),
            Err(ServiceError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let users: Vec<User> = self.session.get_json("/users", &[]).await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.to_lowercase() == email.to_lowercase()))
    }

    async fn create_user(&self, user: User) -> Result<User, ServiceError> {
        self.session.post_json("/users", &user).await
    }

    async fn update_profile(
        &self,
        user_id: &str,
        data: UpdateProfileRequest,
    ) -> Result<User, ServiceError> {
        self.session
            .put_json(&format!("/users/{}", user_id), &data)
            .await
    }

    async fn invite_user_to_team(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<Invitation, ServiceError> {
        self.session
            .post_json(
                &format!("/teams/{}/invitations", team_id),
                &CreateInvitationRequest {
                    user_id: user_id.to_string(),
                },
            )
            .await
    }

    // The upstream resolves invitations of the session user
    async fn pending_invitations(&self, _user_id: &str) -> Result<Vec<Invitation>, ServiceError> {
        self.session.get_json("/invitations", &[]).await
    }

    async fn respond_to_invitation(
        &self,
        _user_id: &str,
        team_id: &str,
        accept: bool,
    ) -> Result<Invitation, ServiceError> {
        let status = if accept { "accepted" } else { "declined" };
        self.session
            .put_json(
                &format!("/invitations/{}", team_id),
                &json!({ "status": status }),
            )
            .await
    }
}
