// hackhub-service/src/routes/auth_routes.rs
use crate::models::{
    AuthResponse, ConfirmRegistrationRequest, RefreshRequest, RegisterRequest, ServiceError, User,
    UserCredentials,
};
use crate::store::HackHubStore;
use crate::utils::registration::{deliver_code, RegistrationCodes};
use crate::utils::{get_claims_from_request, jwt, password, validation};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::{error, info};
use serde_json::json;

fn auth_response(user: User) -> Result<AuthResponse, ServiceError> {
    let access_token = jwt::generate_access_token(&user)?;
    let refresh_token = jwt::generate_refresh_token(&user)?;
    Ok(AuthResponse {
        access_token,
        refresh_token,
        user,
    })
}

// Start registration: validates the request and sends a confirmation code
#[post("/auth/register")]
async fn register(
    store: web::Data<dyn HackHubStore>,
    codes: web::Data<RegistrationCodes>,
    data: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ServiceError> {
    info!("📝 Register request for email: {}", data.email);

    validation::validate_name(&data.name)?;
    validation::validate_email(&data.email)?;
    validation::validate_password(&data.password)?;

    // Check if the email already exists
    if store.find_user_by_email(&data.email).await?.is_some() {
        error!("❌ Email already registered: {}", data.email);
        return Err(ServiceError::BadRequest(
            "Email already registered".to_string(),
        ));
    }

    let password_hash = password::hash_password(&data.password)?;
    let code = codes.issue(data.name.clone(), data.email.clone(), password_hash)?;
    deliver_code(&data.email, &code);

    info!("✅ Registration pending confirmation for: {}", data.email);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Confirmation code sent"
    })))
}

// Finish registration: redeems the code and creates the user
#[post("/auth/confirm")]
async fn confirm(
    store: web::Data<dyn HackHubStore>,
    codes: web::Data<RegistrationCodes>,
    data: web::Json<ConfirmRegistrationRequest>,
) -> Result<HttpResponse, ServiceError> {
    info!("🔑 Confirm registration for email: {}", data.email);

    let registration = codes.verify(&data.email, &data.code)?;

    // The email may have been taken while the code was pending
    if store
        .find_user_by_email(&registration.email)
        .await?
        .is_some()
    {
        error!("❌ Email already registered: {}", registration.email);
        return Err(ServiceError::BadRequest(
            "Email already registered".to_string(),
        ));
    }

    let user = store
        .create_user(User::new(
            registration.name,
            registration.email,
            registration.password_hash,
        ))
        .await?;

    info!("✅ User registered successfully: {}", user.id);

    Ok(HttpResponse::Ok().json(auth_response(user)?))
}

// Login and get an access/refresh token pair
#[post("/auth/login")]
async fn login(
    store: web::Data<dyn HackHubStore>,
    credentials: web::Json<UserCredentials>,
) -> Result<HttpResponse, ServiceError> {
    info!("🔑 Login request for email: {}", credentials.email);

    // Find the user by email
    let user = match store.find_user_by_email(&credentials.email).await? {
        Some(user) => user,
        None => {
            error!("❌ User not found: {}", credentials.email);
            return Err(ServiceError::Unauthorized);
        }
    };

    // Verify password
    let password_hash = user
        .password_hash
        .clone()
        .ok_or(ServiceError::Unauthorized)?;
    if !password::verify_password(&credentials.password, &password_hash)? {
        error!("❌ Invalid password for user: {}", credentials.email);
        return Err(ServiceError::Unauthorized);
    }

    info!("✅ User logged in successfully: {}", user.id);

    Ok(HttpResponse::Ok().json(auth_response(user)?))
}

// Exchange a refresh token for a new token pair
#[post("/auth/refresh")]
async fn refresh(
    store: web::Data<dyn HackHubStore>,
    data: web::Json<RefreshRequest>,
) -> Result<HttpResponse, ServiceError> {
    let claims = jwt::decode_refresh_token(&data.refresh_token)?;

    let user = store
        .find_user_by_id(&claims.sub)
        .await?
        .ok_or(ServiceError::Unauthorized)?;

    info!("🔄 Refreshed session for user: {}", user.id);

    Ok(HttpResponse::Ok().json(auth_response(user)?))
}

// Get current user info (requires authentication)
#[get("/auth/me")]
async fn me(
    req: HttpRequest,
    store: web::Data<dyn HackHubStore>,
) -> Result<HttpResponse, ServiceError> {
    let claims = get_claims_from_request(&req)?;

    if let Some(user) = store.find_user_by_id(&claims.sub).await? {
        return Ok(HttpResponse::Ok().json(user));
    }

    error!("❌ Unauthorized access to /auth/me");
    Err(ServiceError::Unauthorized)
}

// Register all auth routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(confirm)
        .service(login)
        .service(refresh)
        .service(me);
}
