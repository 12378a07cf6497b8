// hackhub-service/src/routes/user_routes.rs
use crate::models::{ServiceError, UpdateProfileRequest, User};
use crate::routes::parse_tags;
use crate::store::HackHubStore;
use crate::utils::get_user_id_from_request;
use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use log::{error, info};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub without_team: bool,
}

// Search users by free text and tags, optionally only those without a team
#[get("/users")]
async fn search_users(
    store: web::Data<dyn HackHubStore>,
    params: web::Query<UserQuery>,
) -> Result<HttpResponse, ServiceError> {
    let tags = parse_tags(&params.tags);

    info!(
        "🔍 Searching users: query='{}' tags={:?} without_team={}",
        params.query, tags, params.without_team
    );

    let users = store
        .search_users(&params.query, &tags, params.without_team)
        .await?;

    info!("✅ Found {} users", users.len());

    Ok(HttpResponse::Ok().json(users))
}

// Get a specific user by ID
#[get("/users/{user_id}")]
async fn get_user(
    store: web::Data<dyn HackHubStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = path.into_inner();

    let user = match store.find_user_by_id(&user_id).await? {
        Some(user) => user,
        None => {
            error!("❌ User not found: {}", user_id);
            return Err(ServiceError::NotFound);
        }
    };

    Ok(HttpResponse::Ok().json(user))
}

// Create a user record directly (conventional CRUD surface)
#[post("/users")]
async fn create_user(
    store: web::Data<dyn HackHubStore>,
    data: web::Json<User>,
) -> Result<HttpResponse, ServiceError> {
    let user = store.create_user(data.into_inner()).await?;

    info!("✅ User created: {}", user.id);

    Ok(HttpResponse::Ok().json(user))
}

// Edit a profile. Users may only edit their own.
#[put("/users/{user_id}")]
async fn update_profile(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
    path: web::Path<String>,
    data: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ServiceError> {
    let current_user_id = get_user_id_from_request(&req)?;
    let user_id = path.into_inner();

    if current_user_id != user_id {
        error!(
            "❌ User: {} cannot edit the profile of: {}",
            current_user_id, user_id
        );
        return Err(ServiceError::Forbidden);
    }

    info!("🔄 Updating profile for user: {}", user_id);

    let user = store.update_profile(&user_id, data.into_inner()).await?;

    info!("✅ Profile updated for user: {}", user_id);

    Ok(HttpResponse::Ok().json(user))
}

// Register all user routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(search_users)
        .service(get_user)
        .service(create_user)
        .service(update_profile);
}
