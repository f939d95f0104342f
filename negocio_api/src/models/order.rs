// negocio_api/src/models/order.rs

use serde::Serialize;
use sqlx::FromRow;

/// A row of `pedidos`. The table is created at startup but no route reads or writes it yet.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub pedido_id: i64,
  pub nombre_cliente: String,
  pub direccion: String,
  pub total: f64,
  pub fecha_pedido: String,
}
