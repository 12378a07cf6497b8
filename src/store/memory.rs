// hackhub-service/src/store/memory.rs
//
// In-memory backend: the membership registry and invitation tracker over a
// process-local dataset. All mutations happen under one lock, so every
// operation observes and leaves a consistent dataset.
use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    CreateHackathonRequest, CreateTeamRequest, Hackathon, Invitation, InvitationStatus,
    ServiceError, Team, UpdateProfileRequest, User,
};
use crate::services::search;
use crate::services::search::TimeTab;
use crate::store::{seed, HackHubStore};

#[derive(Default)]
struct Dataset {
    hackathons: Vec<Hackathon>,
    users: Vec<User>,
    teams: Vec<Team>,
}

pub struct MemoryStore {
    inner: RwLock<Dataset>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Dataset::default()),
        }
    }

    // Mock backend used by default: starts from the demo dataset
    pub fn with_seed_data() -> Self {
        let users = seed::users();
        let teams = seed::teams(&users);
        Self::with_data(seed::hackathons(), users, teams)
    }

    pub fn with_data(hackathons: Vec<Hackathon>, users: Vec<User>, teams: Vec<Team>) -> Self {
        Self {
            inner: RwLock::new(Dataset {
                hackathons,
                users,
                teams,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Dataset>, ServiceError> {
        self.inner.read().map_err(|_| ServiceError::InternalServerError)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Dataset>, ServiceError> {
        self.inner.write().map_err(|_| ServiceError::InternalServerError)
    }

    // Append the resolved user to the team's member list. Fails on unknown
    // team or user, a full team, and duplicate membership.
    fn join_team_inner(dataset: &mut Dataset, team_id: &str, user_id: &str) -> Result<Team, ServiceError> {
        let member = dataset
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(User::as_member)
            .ok_or(ServiceError::NotFound)?;

        let team = dataset
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(ServiceError::NotFound)?;

        if team.has_member(user_id) {
            return Err(ServiceError::Conflict(
                "User is already a member of the team".to_string(),
            ));
        }

        if team.is_full() {
            return Err(ServiceError::Conflict("Team is already full".to_string()));
        }

        team.members.push(member);
        Ok(team.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HackHubStore for MemoryStore {
    async fn search_hackathons(
        &self,
        query: &str,
        tags: &[String],
        tab: TimeTab,
    ) -> Result<Vec<Hackathon>, ServiceError> {
        let dataset = self.read()?;
        Ok(search::search_hackathons(
            &dataset.hackathons,
            query,
            tags,
            tab,
            Utc::now(),
        ))
    }

    async fn find_hackathon_by_id(&self, id: &str) -> Result<Option<Hackathon>, ServiceError> {
        let dataset = self.read()?;
        Ok(dataset.hackathons.iter().find(|h| h.id == id).cloned())
    }

    async fn create_hackathon(
        &self,
        data: CreateHackathonRequest,
    ) -> Result<Hackathon, ServiceError> {
        if data.name.trim().is_empty() || data.description.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Hackathon name and description must not be empty".to_string(),
            ));
        }
        if data.team_size.min < 1 || data.team_size.min > data.team_size.max {
            return Err(ServiceError::BadRequest(
                "Invalid team size range".to_string(),
            ));
        }
        if data.start_date >= data.end_date {
            return Err(ServiceError::BadRequest(
                "Hackathon must start before it ends".to_string(),
            ));
        }

        let hackathon = Hackathon::from_request(data);
        let mut dataset = self.write()?;
        dataset.hackathons.push(hackathon.clone());

        info!("✅ Hackathon created: {}", hackathon.id);
        Ok(hackathon)
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ServiceError> {
        let dataset = self.read()?;
        Ok(dataset.teams.clone())
    }

    async fn teams_for_hackathon(&self, hackathon_id: &str) -> Result<Vec<Team>, ServiceError> {
        let dataset = self.read()?;
        Ok(dataset
            .teams
            .iter()
            .filter(|t| t.hackathon_id == hackathon_id)
            .cloned()
            .collect())
    }

    async fn find_team_by_id(&self, id: &str) -> Result<Option<Team>, ServiceError> {
        let dataset = self.read()?;
        Ok(dataset.teams.iter().find(|t| t.id == id).cloned())
    }

    async fn create_team(
        &self,
        creator_id: &str,
        data: CreateTeamRequest,
    ) -> Result<Team, ServiceError> {
        if data.name.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Team name must not be empty".to_string(),
            ));
        }

        let mut dataset = self.write()?;

        // The parent hackathon's team-size range is enforced here, not at
        // call sites
        let hackathon = dataset
            .hackathons
            .iter()
            .find(|h| h.id == data.hackathon_id)
            .ok_or(ServiceError::NotFound)?;
        if data.max_members < hackathon.team_size.min || data.max_members > hackathon.team_size.max
        {
            return Err(ServiceError::BadRequest(format!(
                "Team size must be between {} and {} for this hackathon",
                hackathon.team_size.min, hackathon.team_size.max
            )));
        }

        let creator = dataset
            .users
            .iter()
            .find(|u| u.id == creator_id)
            .map(User::as_member)
            .ok_or(ServiceError::NotFound)?;

        let team = Team::new(creator, data);
        dataset.teams.push(team.clone());

        info!("✅ Team created: {} by user: {}", team.id, creator_id);
        Ok(team)
    }

    async fn join_team(&self, team_id: &str, user_id: &str) -> Result<Team, ServiceError> {
        let mut dataset = self.write()?;
        let team = Self::join_team_inner(&mut dataset, team_id, user_id)?;

        info!("✅ User: {} joined team: {}", user_id, team_id);
        Ok(team)
    }

    async fn leave_team(&self, team_id: &str, user_id: &str) -> Result<Team, ServiceError> {
        let mut dataset = self.write()?;

        let team = dataset
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(ServiceError::NotFound)?;

        if !team.has_member(user_id) {
            return Err(ServiceError::Conflict(
                "User is not a member of the team".to_string(),
            ));
        }

        if team.created_by == user_id {
            return Err(ServiceError::Conflict(
                "Team creator cannot leave the team".to_string(),
            ));
        }

        team.members.retain(|m| m.id != user_id);

        info!("✅ User: {} left team: {}", user_id, team_id);
        Ok(team.clone())
    }

    async fn search_users(
        &self,
        query: &str,
        tags: &[String],
        without_team: bool,
    ) -> Result<Vec<User>, ServiceError> {
        let dataset = self.read()?;
        let mut users = search::filter_collection(&dataset.users, query, tags);

        if without_team {
            users.retain(|user| !dataset.teams.iter().any(|team| team.has_member(&user.id)));
        }

        Ok(users)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, ServiceError> {
        let dataset = self.read()?;
        Ok(dataset.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let dataset = self.read()?;
        Ok(dataset
            .users
            .iter()
            .find(|u| u.email.to_lowercase() == email.to_lowercase())
            .cloned())
    }

    async fn create_user(&self, user: User) -> Result<User, ServiceError> {
        let mut dataset = self.write()?;

        if dataset
            .users
            .iter()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase())
        {
            return Err(ServiceError::BadRequest(
                "Email already registered".to_string(),
            ));
        }

        dataset.users.push(user.clone());

        info!("✅ User created: {}", user.id);
        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: &str,
        data: UpdateProfileRequest,
    ) -> Result<User, ServiceError> {
        if data.name.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Name must not be empty".to_string(),
            ));
        }

        let mut dataset = self.write()?;

        let user = dataset
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(ServiceError::NotFound)?;

        user.name = data.name;
        user.bio = data.bio;
        user.tags = data.tags;
        user.photo_url = data.photo_url;
        user.location = data.location;
        user.github = data.github;
        user.website = data.website;
        user.skills = data.skills;

        let updated = user.clone();

        // Keep embedded member snapshots in sync with the profile
        let snapshot = updated.as_member();
        for team in dataset.teams.iter_mut() {
            for member in team.members.iter_mut() {
                if member.id == user_id {
                    *member = snapshot.clone();
                }
            }
        }

        info!("✅ Profile updated for user: {}", user_id);
        Ok(updated)
    }

    async fn invite_user_to_team(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<Invitation, ServiceError> {
        let mut dataset = self.write()?;

        let team = dataset
            .teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or(ServiceError::NotFound)?;

        if team.has_member(user_id) {
            return Err(ServiceError::Conflict(
                "User is already a member of the team".to_string(),
            ));
        }

        let user = dataset
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(ServiceError::NotFound)?;

        // Only a pending invitation blocks re-inviting; declined history
        // does not
        if user
            .invitations
            .iter()
            .any(|inv| inv.team_id == team_id && inv.is_pending())
        {
            return Err(ServiceError::Conflict(
                "An invitation for this user to this team already exists".to_string(),
            ));
        }

        let invitation = Invitation::new(team_id.to_string(), user_id.to_string());
        user.invitations.push(invitation.clone());

        info!("✅ Invitation created: {}", invitation.id);
        Ok(invitation)
    }

    async fn pending_invitations(&self, user_id: &str) -> Result<Vec<Invitation>, ServiceError> {
        let dataset = self.read()?;

        let user = dataset
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or(ServiceError::NotFound)?;

        Ok(user
            .invitations
            .iter()
            .filter(|inv| inv.is_pending())
            .cloned()
            .collect())
    }

    async fn respond_to_invitation(
        &self,
        user_id: &str,
        team_id: &str,
        accept: bool,
    ) -> Result<Invitation, ServiceError> {
        let mut dataset = self.write()?;

        // The invitation must exist and still be pending before anything
        // else happens
        let has_pending = dataset
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or(ServiceError::NotFound)?
            .invitations
            .iter()
            .any(|inv| inv.team_id == team_id && inv.is_pending());
        if !has_pending {
            return Err(ServiceError::NotFound);
        }

        // Accepting joins first; the invitation only becomes accepted once
        // the membership exists. A full team leaves it pending.
        if accept {
            Self::join_team_inner(&mut dataset, team_id, user_id)?;
        }

        let user = dataset
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(ServiceError::NotFound)?;
        let invitation = user
            .invitations
            .iter_mut()
            .find(|inv| inv.team_id == team_id && inv.is_pending())
            .ok_or(ServiceError::NotFound)?;

        invitation.status = if accept {
            InvitationStatus::Accepted
        } else {
            InvitationStatus::Declined
        };

        info!(
            "🔄 Invitation to team: {} {} by user: {}",
            team_id,
            if accept { "accepted" } else { "declined" },
            user_id
        );
        Ok(invitation.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn test_user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            bio: String::new(),
            tags: Vec::new(),
            photo_url: String::new(),
            created_at: Utc::now(),
            location: None,
            github: None,
            website: None,
            skills: None,
            invitations: Vec::new(),
            password_hash: None,
        }
    }

    fn test_hackathon(id: &str, min: u32, max: u32) -> Hackathon {
        Hackathon {
            id: id.to_string(),
            name: format!("Hackathon {}", id),
            description: "A test hackathon".to_string(),
            start_date: Utc::now() + Duration::days(30),
            end_date: Utc::now() + Duration::days(32),
            location: "Online".to_string(),
            tags: Vec::new(),
            image_url: String::new(),
            organizer_name: "Org".to_string(),
            organizer_logo: String::new(),
            team_size: crate::models::TeamSize { min, max },
            website: None,
            prizes: None,
            schedule: None,
        }
    }

    fn store_with_users(count: usize, min: u32, max: u32) -> MemoryStore {
        let users: Vec<User> = (1..=count)
            .map(|i| test_user(&i.to_string(), &format!("User {}", i)))
            .collect();
        MemoryStore::with_data(vec![test_hackathon("h1", min, max)], users, Vec::new())
    }

    fn team_request(max_members: u32) -> CreateTeamRequest {
        CreateTeamRequest {
            hackathon_id: "h1".to_string(),
            name: "Team".to_string(),
            description: "A test team".to_string(),
            tags: Vec::new(),
            max_members,
        }
    }

    #[tokio::test]
    async fn create_team_enforces_hackathon_team_size_range() {
        let store = store_with_users(2, 2, 4);

        assert!(store.create_team("1", team_request(1)).await.is_err());
        assert!(store.create_team("1", team_request(5)).await.is_err());

        let team = store.create_team("1", team_request(4)).await.unwrap();
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].id, "1");
        assert_eq!(team.created_by, "1");
    }

    #[tokio::test]
    async fn join_team_respects_capacity_and_rejects_duplicates() {
        let store = store_with_users(4, 1, 2);
        let team = store.create_team("1", team_request(2)).await.unwrap();

        store.join_team(&team.id, "2").await.unwrap();

        // Joining twice with the same user never duplicates membership
        assert!(store.join_team(&team.id, "2").await.is_err());

        // Team is now full
        assert!(store.join_team(&team.id, "3").await.is_err());

        let team = store.find_team_by_id(&team.id).await.unwrap().unwrap();
        assert_eq!(team.members.len(), 2);
        assert!(team.members.len() as u32 <= team.max_members);
    }

    #[tokio::test]
    async fn leave_team_removes_member_but_never_the_creator() {
        let store = store_with_users(3, 1, 3);
        let team = store.create_team("1", team_request(3)).await.unwrap();
        store.join_team(&team.id, "2").await.unwrap();

        let team_after = store.leave_team(&team.id, "2").await.unwrap();
        assert_eq!(team_after.members.len(), 1);

        // Leaving again fails: not a member anymore
        assert!(store.leave_team(&team.id, "2").await.is_err());

        // The creator cannot leave their own team
        assert!(store.leave_team(&team.id, "1").await.is_err());
    }

    #[tokio::test]
    async fn at_most_one_pending_invitation_per_team_and_user() {
        let store = store_with_users(2, 1, 3);
        let team = store.create_team("1", team_request(3)).await.unwrap();

        store.invite_user_to_team(&team.id, "2").await.unwrap();
        assert!(store.invite_user_to_team(&team.id, "2").await.is_err());

        let pending = store.pending_invitations("2").await.unwrap();
        assert_eq!(pending.len(), 1);
    }

    #[tokio::test]
    async fn declining_is_terminal_and_reinviting_creates_a_new_invitation() {
        let store = store_with_users(2, 1, 3);
        let team = store.create_team("1", team_request(3)).await.unwrap();

        let first = store.invite_user_to_team(&team.id, "2").await.unwrap();
        let declined = store
            .respond_to_invitation("2", &team.id, false)
            .await
            .unwrap();
        assert_eq!(declined.id, first.id);
        assert_eq!(declined.status, InvitationStatus::Declined);

        // Membership unchanged
        let team_after = store.find_team_by_id(&team.id).await.unwrap().unwrap();
        assert_eq!(team_after.members.len(), 1);

        // No pending invitation left to respond to
        assert!(store
            .respond_to_invitation("2", &team.id, true)
            .await
            .is_err());

        // Re-inviting after a decline creates a fresh invitation object
        let second = store.invite_user_to_team(&team.id, "2").await.unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(second.status, InvitationStatus::Pending);
    }

    #[tokio::test]
    async fn accepting_adds_the_member_and_marks_the_invitation() {
        let store = store_with_users(2, 1, 3);
        let team = store.create_team("1", team_request(3)).await.unwrap();

        store.invite_user_to_team(&team.id, "2").await.unwrap();
        let accepted = store
            .respond_to_invitation("2", &team.id, true)
            .await
            .unwrap();
        assert_eq!(accepted.status, InvitationStatus::Accepted);

        let team_after = store.find_team_by_id(&team.id).await.unwrap().unwrap();
        assert!(team_after.has_member("2"));
    }

    // A team of four fills up through invitations; a further acceptance
    // must not create a fifth member
    #[tokio::test]
    async fn full_team_scenario_with_four_members() {
        let store = store_with_users(6, 2, 4);
        let team = store.create_team("1", team_request(4)).await.unwrap();

        for id in ["2", "3", "4"] {
            store.invite_user_to_team(&team.id, id).await.unwrap();
            store.respond_to_invitation(id, &team.id, true).await.unwrap();
        }

        let team_after = store.find_team_by_id(&team.id).await.unwrap().unwrap();
        assert_eq!(team_after.members.len(), 4);

        // A further invitation may be created, but accepting it fails
        store.invite_user_to_team(&team.id, "5").await.unwrap();
        assert!(store
            .respond_to_invitation("5", &team.id, true)
            .await
            .is_err());

        let team_after = store.find_team_by_id(&team.id).await.unwrap().unwrap();
        assert_eq!(team_after.members.len(), 4);
    }

    // The accept-on-full-team path must not produce an accepted invitation
    // without a matching membership: the invitation stays pending
    #[tokio::test]
    async fn accepting_into_full_team_keeps_invitation_pending() {
        let store = store_with_users(3, 1, 2);
        let team = store.create_team("1", team_request(2)).await.unwrap();

        store.invite_user_to_team(&team.id, "3").await.unwrap();
        store.join_team(&team.id, "2").await.unwrap();

        assert!(store
            .respond_to_invitation("3", &team.id, true)
            .await
            .is_err());

        let pending = store.pending_invitations("3").await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].status, InvitationStatus::Pending);

        // The user may still decline it
        let declined = store
            .respond_to_invitation("3", &team.id, false)
            .await
            .unwrap();
        assert_eq!(declined.status, InvitationStatus::Declined);
    }

    #[tokio::test]
    async fn search_users_can_exclude_users_with_a_team() {
        let store = store_with_users(3, 1, 3);
        store.create_team("1", team_request(3)).await.unwrap();

        let all = store.search_users("", &[], false).await.unwrap();
        assert_eq!(all.len(), 3);

        let free = store.search_users("", &[], true).await.unwrap();
        let ids: Vec<_> = free.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn profile_update_refreshes_member_snapshots() {
        let store = store_with_users(2, 1, 3);
        let team = store.create_team("1", team_request(3)).await.unwrap();

        let update = UpdateProfileRequest {
            name: "Renamed".to_string(),
            bio: "New bio".to_string(),
            tags: vec!["Rust".to_string()],
            photo_url: String::new(),
            location: None,
            github: None,
            website: None,
            skills: None,
        };
        store.update_profile("1", update).await.unwrap();

        let team_after = store.find_team_by_id(&team.id).await.unwrap().unwrap();
        assert_eq!(team_after.members[0].name, "Renamed");
    }

    #[tokio::test]
    async fn seed_dataset_respects_the_invariants() {
        let store = MemoryStore::with_seed_data();

        let teams = store.list_teams().await.unwrap();
        assert!(!teams.is_empty());

        for team in &teams {
            assert!(team.members.len() as u32 <= team.max_members);
            assert_eq!(team.members[0].id, team.created_by);

            let hackathon = store
                .find_hackathon_by_id(&team.hackathon_id)
                .await
                .unwrap()
                .expect("seed team references a seed hackathon");
            assert!(team.max_members >= hackathon.team_size.min);
            assert!(team.max_members <= hackathon.team_size.max);

            let mut ids: Vec<_> = team.members.iter().map(|m| m.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), team.members.len());
        }
    }
}
