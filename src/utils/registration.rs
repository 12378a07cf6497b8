// hackhub-service/src/utils/registration.rs
use chrono::{DateTime, Duration, Utc};
use log::info;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::ServiceError;

// Confirmation codes expire after 15 minutes
const CODE_LIFETIME_MINUTES: i64 = 15;

// A registration waiting for its emailed confirmation code
#[derive(Debug, Clone)]
pub struct PendingRegistration {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingRegistration {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

// In-process tracker of pending registrations, keyed by lowercased email.
// Constructed once at startup and injected; holds no global state.
pub struct RegistrationCodes {
    pending: Mutex<HashMap<String, PendingRegistration>>,
}

impl RegistrationCodes {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    // Issue a fresh 6-digit code for the given registration, replacing any
    // previous pending attempt for the same email
    pub fn issue(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<String, ServiceError> {
        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));
        let registration = PendingRegistration {
            name,
            email: email.clone(),
            password_hash,
            code: code.clone(),
            expires_at: Utc::now() + Duration::minutes(CODE_LIFETIME_MINUTES),
        };

        let mut pending = self
            .pending
            .lock()
            .map_err(|_| ServiceError::InternalServerError)?;
        pending.insert(email.to_lowercase(), registration);

        Ok(code)
    }

    // Redeem a code. The pending entry is consumed on success and on expiry.
    pub fn verify(&self, email: &str, code: &str) -> Result<PendingRegistration, ServiceError> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| ServiceError::InternalServerError)?;

        let key = email.to_lowercase();
        let registration = match pending.get(&key) {
            Some(registration) => registration.clone(),
            None => {
                return Err(ServiceError::BadRequest(
                    "No pending registration for this email".to_string(),
                ))
            }
        };

        if registration.is_expired() {
            pending.remove(&key);
            return Err(ServiceError::BadRequest(
                "Confirmation code has expired".to_string(),
            ));
        }

        if registration.code != code {
            return Err(ServiceError::BadRequest(
                "Invalid confirmation code".to_string(),
            ));
        }

        pending.remove(&key);
        Ok(registration)
    }

    // Current code for a pending registration, if any
    pub fn pending_code(&self, email: &str) -> Option<String> {
        self.pending
            .lock()
            .ok()?
            .get(&email.to_lowercase())
            .filter(|r| !r.is_expired())
            .map(|r| r.code.clone())
    }

    pub fn has_pending(&self, email: &str) -> bool {
        self.pending
            .lock()
            .map(|pending| {
                pending
                    .get(&email.to_lowercase())
                    .map_or(false, |r| !r.is_expired())
            })
            .unwrap_or(false)
    }
}

impl Default for RegistrationCodes {
    fn default() -> Self {
        Self::new()
    }
}

// Mock delivery: a real deployment would email the code
pub fn deliver_code(email: &str, code: &str) {
    info!("📧 Confirmation code for {}: {}", email, code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify_round_trip() {
        let codes = RegistrationCodes::new();
        let code = codes
            .issue(
                "Sam".to_string(),
                "sam@example.com".to_string(),
                "hash".to_string(),
            )
            .unwrap();

        assert_eq!(code.len(), 6);
        assert!(codes.has_pending("SAM@example.com"));

        let registration = codes.verify("sam@example.com", &code).unwrap();
        assert_eq!(registration.name, "Sam");

        // Consumed on success
        assert!(codes.verify("sam@example.com", &code).is_err());
    }

    #[test]
    fn wrong_code_is_rejected_but_not_consumed() {
        let codes = RegistrationCodes::new();
        let code = codes
            .issue(
                "Sam".to_string(),
                "sam@example.com".to_string(),
                "hash".to_string(),
            )
            .unwrap();

        let wrong = if code == "000000" { "000001" } else { "000000" };
        assert!(codes.verify("sam@example.com", wrong).is_err());
        assert!(codes.has_pending("sam@example.com"));
    }

    #[test]
    fn reissue_replaces_previous_code() {
        let codes = RegistrationCodes::new();
        codes
            .issue(
                "Sam".to_string(),
                "sam@example.com".to_string(),
                "hash".to_string(),
            )
            .unwrap();
        let second = codes
            .issue(
                "Sam".to_string(),
                "sam@example.com".to_string(),
                "hash".to_string(),
            )
            .unwrap();

        assert!(codes.verify("sam@example.com", &second).is_ok());
    }
}
