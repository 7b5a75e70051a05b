use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use brandgen::{logger, server, Config, GenerationClient, ImageStore};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    logger::log_startup_info(server::SERVICE_NAME, env!("CARGO_PKG_VERSION"), config.port());
    logger::log_config_info(&config);

    let client = GenerationClient::new(&config)?;
    let store = ImageStore::new(config.static_dir(), config.public_base_url())?;
    let static_dir = config.static_dir();
    let state = web::Data::new(server::AppState { client, store });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // In production, restrict to the backend origin.
            .wrap(Cors::permissive())
            .configure(server::configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(("0.0.0.0", config.port()))?
    .run()
    .await?;

    Ok(())
}
