// negocio_api/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use negocio_api::config::AppConfig;
use negocio_api::db::Store;
use negocio_api::state::AppState;
use negocio_api::web::configure_app_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      // Allow RUST_LOG override, INFO otherwise
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str())),
    )
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting negocio API server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let store = Store::new(&app_config.database_path);
  store
    .init()
    .await
    .with_context(|| format!("Failed to initialize database at {}", app_config.database_path.display()))?;

  let app_state = AppState { store };

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await?;

  Ok(())
}
