use std::path::Path;
use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use movie_catalog::db::{establish_connection_pool, run_migrations};
use movie_catalog::middleware::api_key::ApiKey;
use movie_catalog::models::config::ServerConfig;
use movie_catalog::repository::DieselRepository;
use movie_catalog::routes;
use movie_catalog::services::exchange_rate::{self, ExchangeRateService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }

    let rates: Arc<dyn ExchangeRateService> =
        match exchange_rate::from_config(&server_config.exchange_rate) {
            Ok(rates) => rates,
            Err(e) => {
                log::error!("Failed to set up exchange rate service: {e}");
                std::process::exit(1);
            }
        };

    let repo = DieselRepository::new(pool);
    let api_key = ApiKey::new(server_config.api_key.clone());
    let static_dir = server_config
        .static_dir
        .clone()
        .filter(|dir| Path::new(dir).is_dir());

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(rates.clone()))
            .app_data(web::Data::new(api_key.clone()))
            .configure(routes::configure);

        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/", dir).index_file("index.html"));
        }

        app
    })
    .bind(bind_address)?
    .run()
    .await
}
