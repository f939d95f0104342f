// negocio_api/src/lib.rs

//! Product catalog backend: a SQLite store behind a small actix-web API.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;

pub use errors::{AppError, Result};
