// hackhub-service/src/routes/hackathon_routes.rs
use crate::models::{CreateHackathonRequest, ServiceError};
use crate::routes::parse_tags;
use crate::services::search::TimeTab;
use crate::store::HackHubStore;
use actix_web::{get, post, web, HttpResponse};
use log::{error, info};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct HackathonQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub tab: String,
}

// Search hackathons by free text, tags and time window
#[get("/hackathons")]
async fn search_hackathons(
    store: web::Data<dyn HackHubStore>,
    params: web::Query<HackathonQuery>,
) -> Result<HttpResponse, ServiceError> {
    let tab = TimeTab::parse(&params.tab)?;
    let tags = parse_tags(&params.tags);

    info!(
        "🔍 Searching hackathons: query='{}' tags={:?} tab={}",
        params.query,
        tags,
        tab.as_str()
    );

    let hackathons = store.search_hackathons(&params.query, &tags, tab).await?;

    info!("✅ Found {} hackathons", hackathons.len());

    Ok(HttpResponse::Ok().json(hackathons))
}

// Get a specific hackathon by ID
#[get("/hackathons/{hackathon_id}")]
async fn get_hackathon(
    store: web::Data<dyn HackHubStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let hackathon_id = path.into_inner();

    let hackathon = match store.find_hackathon_by_id(&hackathon_id).await? {
        Some(hackathon) => hackathon,
        None => {
            error!("❌ Hackathon not found: {}", hackathon_id);
            return Err(ServiceError::NotFound);
        }
    };

    Ok(HttpResponse::Ok().json(hackathon))
}

// Create a new hackathon (organizer action)
#[post("/hackathons")]
async fn create_hackathon(
    store: web::Data<dyn HackHubStore>,
    data: web::Json<CreateHackathonRequest>,
) -> Result<HttpResponse, ServiceError> {
    info!("📝 Creating new hackathon: {}", data.name);

    let hackathon = store.create_hackathon(data.into_inner()).await?;

    info!("✅ Hackathon created successfully: {}", hackathon.id);

    Ok(HttpResponse::Ok().json(hackathon))
}

// Register all hackathon routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(search_hackathons)
        .service(get_hackathon)
        .service(create_hackathon);
}
