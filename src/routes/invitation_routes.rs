// hackhub-service/src/routes/invitation_routes.rs
use crate::models::{CreateInvitationRequest, ServiceError};
use crate::store::HackHubStore;
use crate::utils::get_user_id_from_request;
use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use log::{error, info};

// Create a new team invitation
#[post("/teams/{team_id}/invitations")]
async fn create_invitation(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
    path: web::Path<String>,
    data: web::Json<CreateInvitationRequest>,
) -> Result<HttpResponse, ServiceError> {
    let inviter_id = get_user_id_from_request(&req)?;
    let team_id = path.into_inner();

    info!(
        "📧 Creating invitation to team: {} for user: {}",
        team_id, data.user_id
    );

    // Verify the team exists
    let team = match store.find_team_by_id(&team_id).await? {
        Some(team) => team,
        None => {
            error!("❌ Team not found: {}", team_id);
            return Err(ServiceError::NotFound);
        }
    };

    // Only team members can invite
    if !team.has_member(&inviter_id) {
        error!(
            "❌ User: {} is not a member of team: {} and cannot invite",
            inviter_id, team_id
        );
        return Err(ServiceError::Forbidden);
    }

    let invitation = store.invite_user_to_team(&team_id, &data.user_id).await?;

    info!("✅ Invitation created: {}", invitation.id);

    Ok(HttpResponse::Ok().json(invitation))
}

// Get all pending invitations for the current user
#[get("/invitations")]
async fn get_user_invitations(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;

    info!("📋 Fetching invitations for user: {}", user_id);

    let invitations = store.pending_invitations(&user_id).await?;

    info!("✅ Found {} pending invitations", invitations.len());

    Ok(HttpResponse::Ok().json(invitations))
}

// Respond to the pending invitation for a team (accept/decline)
#[put("/invitations/{team_id}")]
async fn respond_to_invitation(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
    path: web::Path<String>,
    data: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;
    let team_id = path.into_inner();

    // Parse the status from the request
    let status_str = match data.get("status") {
        Some(serde_json::Value::String(s)) => s.to_lowercase(),
        _ => {
            return Err(ServiceError::BadRequest(
                "Invalid or missing 'status' field".to_string(),
            ))
        }
    };

    let accept = match status_str.as_str() {
        "accepted" => true,
        "declined" => false,
        _ => {
            return Err(ServiceError::BadRequest(format!(
                "Invalid status: {}. Must be 'accepted' or 'declined'",
                status_str
            )))
        }
    };

    info!(
        "🔄 Responding to invitation for team {}: {}",
        team_id, status_str
    );

    let invitation = store
        .respond_to_invitation(&user_id, &team_id, accept)
        .await?;

    if accept {
        info!("✅ User: {} joined team: {}", user_id, team_id);
    } else {
        info!("✅ Invitation declined by user: {}", user_id);
    }

    Ok(HttpResponse::Ok().json(invitation))
}

// Register all invitation routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_invitation)
        .service(get_user_invitations)
        .service(respond_to_invitation);
}
