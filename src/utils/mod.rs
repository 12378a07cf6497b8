// hackhub-service/src/utils/mod.rs
use crate::models::{Claims, ServiceError, User};
use actix_web::http::header;
use actix_web::{HttpMessage, HttpRequest};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lazy_static::lazy_static;
use regex::Regex;
use std::env;

pub mod registration;

pub use auth_middleware::Authentication;

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

// JWT utility functions
pub mod jwt {
    use super::*;

    // Access tokens are short-lived; refresh tokens carry the session
    const ACCESS_TOKEN_MINUTES: i64 = 60;
    const REFRESH_TOKEN_DAYS: i64 = 30;

    // Get JWT secret from environment or use default
    fn get_jwt_secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| "hackhub_super_secret_key".to_string())
    }

    fn generate_token(user: &User, token_type: &str, lifetime: Duration) -> Result<String, ServiceError> {
        let secret = get_jwt_secret();
        let expiration = Utc::now()
            .checked_add_signed(lifetime)
            .expect("Valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            exp: expiration,
            iat: Utc::now().timestamp() as usize,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
            .map_err(|_| ServiceError::InternalServerError)
    }

    // Generate a new access token for a user
    pub fn generate_access_token(user: &User) -> Result<String, ServiceError> {
        generate_token(user, ACCESS_TOKEN_TYPE, Duration::minutes(ACCESS_TOKEN_MINUTES))
    }

    // Generate a new refresh token for a user
    pub fn generate_refresh_token(user: &User) -> Result<String, ServiceError> {
        generate_token(user, REFRESH_TOKEN_TYPE, Duration::days(REFRESH_TOKEN_DAYS))
    }

    // Validate and decode a JWT token
    pub fn decode_token(token: &str) -> Result<Claims, ServiceError> {
        let secret = get_jwt_secret();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
            .map(|data| data.claims)
            .map_err(|_| ServiceError::Unauthorized)
    }

    // Decode a token and require it to be an access token
    pub fn decode_access_token(token: &str) -> Result<Claims, ServiceError> {
        let claims = decode_token(token)?;
        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(ServiceError::Unauthorized);
        }
        Ok(claims)
    }

    // Decode a token and require it to be a refresh token
    pub fn decode_refresh_token(token: &str) -> Result<Claims, ServiceError> {
        let claims = decode_token(token)?;
        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(ServiceError::Unauthorized);
        }
        Ok(claims)
    }

    // Extract JWT from Authorization header
    pub fn extract_token_from_header(auth_header: &str) -> Result<String, ServiceError> {
        if !auth_header.starts_with("Bearer ") {
            return Err(ServiceError::Unauthorized);
        }

        Ok(auth_header.trim_start_matches("Bearer ").to_string())
    }
}

// Password utility functions
pub mod password {
    use super::*;

    // Hash a password using bcrypt
    pub fn hash_password(password: &str) -> Result<String, ServiceError> {
        hash(password, DEFAULT_COST)
            .map_err(|_| ServiceError::InternalServerError)
    }

    // Verify a password against a hash
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, ServiceError> {
        verify(password, hash)
            .map_err(|_| ServiceError::InternalServerError)
    }
}

// Request field validation
pub mod validation {
    use super::*;

    lazy_static! {
        static ref EMAIL_RE: Regex =
            Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex");
    }

    pub fn validate_email(email: &str) -> Result<(), ServiceError> {
        if !EMAIL_RE.is_match(email) {
            return Err(ServiceError::BadRequest("Invalid email address".to_string()));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), ServiceError> {
        if password.len() < 8 {
            return Err(ServiceError::BadRequest(
                "Password must be at least 8 characters long".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_name(name: &str) -> Result<(), ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::BadRequest("Name must not be empty".to_string()));
        }
        Ok(())
    }
}

// Extract validated claims from a request. Prefers the claims the middleware
// placed in the extensions; falls back to decoding the Authorization header
// so routes outside the protected scope (e.g. /auth/me) work too.
pub fn get_claims_from_request(req: &HttpRequest) -> Result<Claims, ServiceError> {
    if let Some(claims) = req.extensions().get::<Claims>() {
        return Ok(claims.clone());
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ServiceError::Unauthorized)?;

    let token = jwt::extract_token_from_header(auth_header)?;
    jwt::decode_access_token(&token)
}

pub fn get_user_id_from_request(req: &HttpRequest) -> Result<String, ServiceError> {
    get_claims_from_request(req).map(|claims| claims.sub)
}

// Middleware for JWT authentication
pub mod auth_middleware {
    use super::*;
    use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
    use actix_web::{error::ErrorUnauthorized, Error};
    use futures::future::{ok, Ready};
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    pub struct Authentication;

    impl<S, B> Transform<S, ServiceRequest> for Authentication
    where
        S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
        S::Future: 'static,
        B: 'static,
    {
        type Response = ServiceResponse<B>;
        type Error = Error;
        type Transform = AuthenticationMiddleware<S>;
        type InitError = ();
        type Future = Ready<Result<Self::Transform, Self::InitError>>;

        fn new_transform(&self, service: S) -> Self::Future {
            ok(AuthenticationMiddleware { service })
        }
    }

    pub struct AuthenticationMiddleware<S> {
        service: S,
    }

    impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
    where
        S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
        S::Future: 'static,
        B: 'static,
    {
        type Response = ServiceResponse<B>;
        type Error = Error;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

        forward_ready!(service);

        fn call(&self, req: ServiceRequest) -> Self::Future {
            // Get Authorization header
            let auth_header = req.headers().get(header::AUTHORIZATION);

            if let Some(auth_header) = auth_header {
                if let Ok(auth_str) = auth_header.to_str() {
                    if let Ok(token) = jwt::extract_token_from_header(auth_str) {
                        // Only access tokens may authenticate requests
                        if let Ok(claims) = jwt::decode_access_token(&token) {
                            req.extensions_mut().insert(claims);
                            let fut = self.service.call(req);
                            return Box::pin(async move {
                                fut.await
                            });
                        }
                    }
                }
            }

            Box::pin(async move {
                Err(ErrorUnauthorized("Unauthorized"))
            })
        }
    }
}
