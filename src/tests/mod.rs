
pub mod common {
    use actix_web::web;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    use crate::models::{Hackathon, TeamSize, User};
    use crate::routes::{
        auth_routes, hackathon_routes, invitation_routes, team_routes, user_routes,
    };
    use crate::store::{HackHubStore, MemoryStore};
    use crate::utils::registration::RegistrationCodes;
    use crate::utils::{jwt, Authentication};

    pub fn test_user(id: &str, name: &str) -> User {
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

    pub fn test_hackathon(id: &str, min: u32, max: u32) -> Hackathon {
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
            team_size: TeamSize { min, max },
            website: None,
            prizes: None,
            schedule: None,
        }
    }

    // Store with one hackathon ("h1") and the given number of users ("1"..)
    pub fn store_with_users(count: usize, min: u32, max: u32) -> Arc<MemoryStore> {
        let users: Vec<User> = (1..=count)
            .map(|i| test_user(&i.to_string(), &format!("User {}", i)))
            .collect();
        Arc::new(MemoryStore::with_data(
            vec![test_hackathon("h1", min, max)],
            users,
            Vec::new(),
        ))
    }

    // Wire the full route tree the way main does, against the given store
    pub fn configure_app(
        store: Arc<MemoryStore>,
        codes: web::Data<RegistrationCodes>,
    ) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg: &mut web::ServiceConfig| {
            let store: Arc<dyn HackHubStore> = store;
            cfg.app_data(web::Data::from(store))
                .app_data(codes)
                .configure(auth_routes::init_routes)
                .service(
                    web::scope("")
                        .wrap(Authentication)
                        .configure(hackathon_routes::init_routes)
                        .configure(team_routes::init_routes)
                        .configure(user_routes::init_routes)
                        .configure(invitation_routes::init_routes),
                );
        }
    }

    pub fn bearer(user: &User) -> (&'static str, String) {
        let token = jwt::generate_access_token(user).expect("token for test user");
        ("Authorization", format!("Bearer {}", token))
    }
}
