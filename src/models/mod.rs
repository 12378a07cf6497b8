// hackhub-service/src/models/mod.rs
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod hackathon;
pub use hackathon::*;

pub mod team;
pub use team::*;

pub mod user;
pub use user::*;

pub mod invitations;
pub use invitations::*;

// Credentials for login
#[derive(Serialize, Deserialize, Debug)]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}

// First registration step: issues a confirmation code
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Second registration step: redeems the emailed code
#[derive(Serialize, Deserialize, Debug)]
pub struct ConfirmRegistrationRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// Returned by confirm, login and refresh
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

// JWT claims structure for authentication
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (user ID)
    pub email: String,
    pub exp: usize,   // Expiration time
    pub iat: usize,   // Issued at
    pub token_type: String, // "access" or "refresh"
}

// Custom error types
#[derive(Debug, Display)]
pub enum ServiceError {
    #[display(fmt = "Internal Server Error")]
    InternalServerError,
    #[display(fmt = "BadRequest: {}", _0)]
    BadRequest(String),
    #[display(fmt = "Unauthorized")]
    Unauthorized,
    #[display(fmt = "Not Found")]
    NotFound,
    #[display(fmt = "Forbidden")]
    Forbidden,
    #[display(fmt = "Conflict: {}", _0)]
    Conflict(String),
    #[display(fmt = "Upstream error: {}", _0)]
    Upstream(String),
}

// Implement std::error::Error for ServiceError
impl std::error::Error for ServiceError {}

// Implement ResponseError for ServiceError
impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::InternalServerError =>
                HttpResponse::InternalServerError().json("Internal Server Error"),
            ServiceError::BadRequest(ref message) =>
                HttpResponse::BadRequest().json(message),
            ServiceError::Unauthorized =>
                HttpResponse::Unauthorized().json("Unauthorized"),
            ServiceError::NotFound =>
                HttpResponse::NotFound().json("Not Found"),
            ServiceError::Forbidden =>
                HttpResponse::Forbidden().json("Forbidden: You don't have permission to access this resource"),
            ServiceError::Conflict(ref message) =>
                HttpResponse::Conflict().json(message),
            ServiceError::Upstream(ref message) =>
                HttpResponse::BadGateway().json(message),
        }
    }
}
