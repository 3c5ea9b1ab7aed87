use actix_files::Files;
use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

mod api;
mod config;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod store;

use config::Config;
use store::Store;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    let store = Data::new(Store::new(config.data_file.clone()));

    info!(
        data_file = %store.path().display(),
        static_dir = %config.static_dir.display(),
        "Server starting..."
    );

    store.ensure_exists().await?;

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets match
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .configure(|cfg| routes::configure(cfg, &config_data))
            // Front end last so API paths win
            .service(Files::new("/", &config_data.static_dir).index_file("index.html"))
    })
    .bind(&server_addr)?;

    info!("Server is running on http://{server_addr}");
    println!("Server is running on http://{server_addr}");

    server.run().await?;
    Ok(())
}
