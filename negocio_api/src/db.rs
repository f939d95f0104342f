// negocio_api/src/db.rs

//! SQLite store: schema bootstrap and per-request connections.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{info, instrument};

use crate::errors::Result;

/// File holding every table of the application.
pub const DB_NAME: &str = "negocio.db";

const CREATE_PRODUCTOS: &str = r#"
  CREATE TABLE IF NOT EXISTS productos (
    producto_id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    descripcion TEXT,
    precio REAL NOT NULL,
    imagen TEXT,
    categoria TEXT NOT NULL,
    fecha_creacion TEXT NOT NULL
  )
"#;

const CREATE_PEDIDOS: &str = r#"
  CREATE TABLE IF NOT EXISTS pedidos (
    pedido_id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre_cliente TEXT NOT NULL,
    direccion TEXT NOT NULL,
    total REAL NOT NULL,
    fecha_pedido TEXT NOT NULL
  )
"#;

const CREATE_PEDIDO_DETALLE: &str = r#"
  CREATE TABLE IF NOT EXISTS pedido_detalle (
    detalle_id INTEGER PRIMARY KEY AUTOINCREMENT,
    pedido_id INTEGER NOT NULL,
    producto_id INTEGER NOT NULL,
    cantidad INTEGER NOT NULL,
    precio_unitario REAL NOT NULL,
    FOREIGN KEY (pedido_id) REFERENCES pedidos(pedido_id),
    FOREIGN KEY (producto_id) REFERENCES productos(producto_id)
  )
"#;

/// Handle to the database file. Cloning it is cheap; it holds no open connection.
#[derive(Debug, Clone)]
pub struct Store {
  options: SqliteConnectOptions,
}

impl Store {
  pub fn new(path: impl AsRef<Path>) -> Self {
    let options = SqliteConnectOptions::new()
      .filename(path.as_ref())
      .create_if_missing(true);
    Self { options }
  }

  /// Opens a fresh connection owned by the caller.
  ///
  /// There is no pool: the connection is closed when the returned value is
  /// dropped, which covers early returns through `?` as well.
  pub async fn connect(&self) -> Result<SqliteConnection> {
    Ok(self.options.connect().await?)
  }

  /// Creates the `productos`, `pedidos` and `pedido_detalle` tables if they
  /// are missing. Safe to call on every start.
  #[instrument(name = "db::init", skip(self))]
  pub async fn init(&self) -> Result<()> {
    let mut conn = self.connect().await?;

    for ddl in [CREATE_PRODUCTOS, CREATE_PEDIDOS, CREATE_PEDIDO_DETALLE] {
      sqlx::query(ddl).execute(&mut conn).await?;
    }

    conn.close().await?;
    info!("Base de datos inicializada");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Order, OrderDetail};

  async fn fresh_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Store::new(dir.path().join(DB_NAME));
    store.init().await.expect("init should succeed");
    (dir, store)
  }

  async fn table_names(store: &Store) -> Vec<String> {
    let mut conn = store.connect().await.unwrap();
    sqlx::query_scalar(
      "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(&mut conn)
    .await
    .unwrap()
  }

  #[actix_web::test]
  async fn init_creates_the_three_tables() {
    let (_dir, store) = fresh_store().await;
    assert_eq!(table_names(&store).await, vec!["pedido_detalle", "pedidos", "productos"]);
  }

  #[actix_web::test]
  async fn init_is_idempotent() {
    let (_dir, store) = fresh_store().await;
    store.init().await.expect("second init should succeed");
    store.init().await.expect("third init should succeed");
    assert_eq!(table_names(&store).await.len(), 3);
  }

  #[actix_web::test]
  async fn init_keeps_existing_rows() {
    let (_dir, store) = fresh_store().await;
    let mut conn = store.connect().await.unwrap();
    sqlx::query(
      "INSERT INTO productos (nombre, descripcion, precio, imagen, categoria, fecha_creacion) \
       VALUES ('Taza', 'Ceramica', 10, 'taza.png', 'Hogar', '2024-01-01T00:00:00.000000')",
    )
    .execute(&mut conn)
    .await
    .unwrap();
    drop(conn);

    store.init().await.unwrap();

    let mut conn = store.connect().await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
      .fetch_one(&mut conn)
      .await
      .unwrap();
    assert_eq!(count, 1);
  }

  #[actix_web::test]
  async fn order_rows_map_onto_models() {
    let (_dir, store) = fresh_store().await;
    let mut conn = store.connect().await.unwrap();

    let producto_id = sqlx::query(
      "INSERT INTO productos (nombre, precio, categoria, fecha_creacion) \
       VALUES ('Taza', 10, 'Hogar', '2024-01-01T00:00:00.000000')",
    )
    .execute(&mut conn)
    .await
    .unwrap()
    .last_insert_rowid();

    let pedido_id = sqlx::query(
      "INSERT INTO pedidos (nombre_cliente, direccion, total, fecha_pedido) \
       VALUES ('Ana', 'Calle 1', 20, '2024-01-02T00:00:00.000000')",
    )
    .execute(&mut conn)
    .await
    .unwrap()
    .last_insert_rowid();

    sqlx::query(
      "INSERT INTO pedido_detalle (pedido_id, producto_id, cantidad, precio_unitario) VALUES (?, ?, 2, 10)",
    )
    .bind(pedido_id)
    .bind(producto_id)
    .execute(&mut conn)
    .await
    .unwrap();

    let order: Order = sqlx::query_as("SELECT * FROM pedidos WHERE pedido_id = ?")
      .bind(pedido_id)
      .fetch_one(&mut conn)
      .await
      .unwrap();
    assert_eq!(order.nombre_cliente, "Ana");
    assert_eq!(order.total, 20.0);

    let detail: OrderDetail = sqlx::query_as("SELECT * FROM pedido_detalle WHERE pedido_id = ?")
      .bind(pedido_id)
      .fetch_one(&mut conn)
      .await
      .unwrap();
    assert_eq!(detail.producto_id, producto_id);
    assert_eq!(detail.cantidad, 2);
    assert_eq!(detail.precio_unitario, 10.0);
  }

  #[actix_web::test]
  async fn line_items_reject_unknown_references() {
    let (_dir, store) = fresh_store().await;
    let mut conn = store.connect().await.unwrap();

    let result = sqlx::query(
      "INSERT INTO pedido_detalle (pedido_id, producto_id, cantidad, precio_unitario) VALUES (41, 42, 1, 5)",
    )
    .execute(&mut conn)
    .await;

    assert!(result.is_err(), "foreign keys should reject orphan line items");
  }
}
