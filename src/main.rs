//Third-party-dependencies
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use hackhub_service::routes::{
    auth_routes, hackathon_routes, invitation_routes, team_routes, user_routes,
};
use hackhub_service::store;
use hackhub_service::utils::registration::RegistrationCodes;
use hackhub_service::utils::Authentication;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // address the server will run on
    let address = env::var("HACKHUB_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // data backend: seeded in-memory mock by default, or a thin client
    // against an upstream ХакХаб API
    let store = store::build_store_from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let store_data = web::Data::from(store);
    let registration_codes = web::Data::new(RegistrationCodes::new());

    info!("🚀 ХакХаб service listening on {}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(store_data.clone())
            .app_data(registration_codes.clone())
            .configure(auth_routes::init_routes)
            .service(
                web::scope("")
                    .wrap(Authentication)
                    .configure(hackathon_routes::init_routes)
                    .configure(team_routes::init_routes)
                    .configure(user_routes::init_routes)
                    .configure(invitation_routes::init_routes),
            )
    })
    .bind(address)?
    .run()
    .await
}
