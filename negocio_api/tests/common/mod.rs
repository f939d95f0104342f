// negocio_api/tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use negocio_api::db::{Store, DB_NAME};
use negocio_api::state::AppState;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tempfile::TempDir;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Initialized store in its own temp dir. Keep the `TempDir` alive for the whole test.
pub async fn test_state() -> (TempDir, AppState) {
  setup_tracing();
  let dir = tempfile::tempdir().expect("temp dir");
  let store = Store::new(dir.path().join(DB_NAME));
  store.init().await.expect("store init");

  (dir, AppState { store })
}

pub fn taza() -> Value {
  json!({
    "nombre": "Taza",
    "descripcion": "Ceramica",
    "precio": 10,
    "imagen": "taza.png",
    "categoria": "Hogar"
  })
}

pub fn product_body(n: usize) -> Value {
  json!({
    "nombre": format!("Producto {}", n),
    "descripcion": format!("Descripcion {}", n),
    "precio": n * 100,
    "imagen": format!("producto_{}.png", n),
    "categoria": if n % 2 == 0 { "Hogar" } else { "Cocina" }
  })
}
