mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::Config;
use crate::repositories::UserRepository;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    info!("Connecting to database {}...", config.database_target());
    let repository = match UserRepository::connect(&config).await {
        Ok(repository) => repository,
        Err(err) => {
            error!("Error connecting to the database: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = repository.ping().await {
        error!("Database is unreachable: {}", err);
        std::process::exit(1);
    }
    info!("Connected to the database successfully!");

    let user_service = web::Data::new(UserService::new(repository));

    let server_addr = config.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
