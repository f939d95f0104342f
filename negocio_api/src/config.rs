// negocio_api/src/config.rs

use crate::db::DB_NAME;
use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Always `DB_NAME`; the store location is not read from the environment.
  pub database_path: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = parse_port(env::var("SERVER_PORT").ok().as_deref())?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_path: PathBuf::from(DB_NAME),
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
  raw
    .unwrap_or("8000")
    .parse::<u16>()
    .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))
}
