// hackhub-service/src/models/hackathon.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Allowed team size range for a hackathon
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamSize {
    pub min: u32,
    pub max: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Prize {
    pub place: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScheduleItem {
    pub date: String,
    pub time: String,
    pub title: String,
    pub description: String,
}

// Hackathon model. Immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub organizer_name: String,
    pub organizer_logo: String,
    pub team_size: TeamSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prizes: Option<Vec<Prize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleItem>>,
}

// Request to create a new hackathon
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateHackathonRequest {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub organizer_name: String,
    pub organizer_logo: String,
    pub team_size: TeamSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prizes: Option<Vec<Prize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleItem>>,
}

impl Hackathon {
    // Build a hackathon from a creation request, assigning a fresh id
    pub fn from_request(data: CreateHackathonRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            description: data.description,
            start_date: data.start_date,
            end_date: data.end_date,
            location: data.location,
            tags: data.tags,
            image_url: data.image_url,
            organizer_name: data.organizer_name,
            organizer_logo: data.organizer_logo,
            team_size: data.team_size,
            website: data.website,
            prizes: data.prizes,
            schedule: data.schedule,
        }
    }
}
