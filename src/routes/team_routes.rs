// hackhub-service/src/routes/team_routes.rs
use crate::models::{CreateTeamRequest, ServiceError};
use crate::routes::parse_tags;
use crate::services::search;
use crate::store::HackHubStore;
use crate::utils::get_user_id_from_request;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use log::{error, info};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamQuery {
    #[serde(default)]
    pub hackathon_id: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub tags: String,
}

// List teams, optionally narrowed to one hackathon and filtered by text/tags
#[get("/teams")]
async fn list_teams(
    store: web::Data<dyn HackHubStore>,
    params: web::Query<TeamQuery>,
) -> Result<HttpResponse, ServiceError> {
    let teams = if params.hackathon_id.is_empty() {
        store.list_teams().await?
    } else {
        store.teams_for_hackathon(&params.hackathon_id).await?
    };

    let tags = parse_tags(&params.tags);
    let teams = search::filter_collection(&teams, &params.query, &tags);

    info!("✅ Found {} teams", teams.len());

    Ok(HttpResponse::Ok().json(teams))
}

// Get a specific team by ID
#[get("/teams/{team_id}")]
async fn get_team(
    store: web::Data<dyn HackHubStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();

    let team = match store.find_team_by_id(&team_id).await? {
        Some(team) => team,
        None => {
            error!("❌ Team not found: {}", team_id);
            return Err(ServiceError::NotFound);
        }
    };

    Ok(HttpResponse::Ok().json(team))
}

// Create a new team with the current user as its founding member
#[post("/teams")]
async fn create_team(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
    data: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;

    info!("📝 Creating new team: {} for user: {}", data.name, user_id);

    let team = store.create_team(&user_id, data.into_inner()).await?;

    info!("✅ Team created successfully: {}", team.id);

    Ok(HttpResponse::Ok().json(team))
}

// Join a team. Users may only join as themselves.
#[post("/teams/{team_id}/members/{user_id}")]
async fn join_team(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let current_user_id = get_user_id_from_request(&req)?;
    let (team_id, user_id) = path.into_inner();

    if current_user_id != user_id {
        error!("❌ User: {} cannot join a team as: {}", current_user_id, user_id);
        return Err(ServiceError::Forbidden);
    }

    info!("👥 User: {} joining team: {}", user_id, team_id);

    let team = store.join_team(&team_id, &user_id).await?;

    info!("✅ User: {} joined team: {}", user_id, team_id);

    Ok(HttpResponse::Ok().json(team))
}

// Leave a team. Users may only remove themselves; the creator cannot leave.
#[delete("/teams/{team_id}/members/{user_id}")]
async fn leave_team(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let current_user_id = get_user_id_from_request(&req)?;
    let (team_id, user_id) = path.into_inner();

    if current_user_id != user_id {
        error!(
            "❌ User: {} cannot remove: {} from team: {}",
            current_user_id, user_id, team_id
        );
        return Err(ServiceError::Forbidden);
    }

    info!("🗑️ User: {} leaving team: {}", user_id, team_id);

    let team = store.leave_team(&team_id, &user_id).await?;

    info!("✅ User: {} left team: {}", user_id, team_id);

    Ok(HttpResponse::Ok().json(team))
}

// Register all team routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_teams)
        .service(get_team)
        .service(create_team)
        .service(join_team)
        .service(leave_team);
}
