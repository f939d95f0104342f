// negocio_api/src/models/order_detail.rs

use serde::Serialize;
use sqlx::FromRow;

/// A row of `pedido_detalle`: one product line of an order, priced at the time of purchase.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderDetail {
  pub detalle_id: i64,
  pub pedido_id: i64,
  pub producto_id: i64,
  pub cantidad: i64,
  pub precio_unitario: f64,
}
