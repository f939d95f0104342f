// negocio_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::product::{creation_timestamp, NewProduct, Product};
use crate::state::AppState;

pub const PRODUCT_CREATED_MESSAGE: &str = "Producto creado exitosamente";
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "No se encontro el producto";

#[instrument(
  name = "handler::create_product",
  skip(app_state, payload),
  fields(nombre = %payload.nombre, categoria = %payload.categoria)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let new_product = payload.into_inner();
  let fecha_creacion = creation_timestamp();

  let mut conn = app_state.store.connect().await?;

  let producto_id = sqlx::query(
    "INSERT INTO productos (nombre, descripcion, precio, imagen, categoria, fecha_creacion) \
     VALUES (?, ?, ?, ?, ?, ?)",
  )
  .bind(&new_product.nombre)
  .bind(&new_product.descripcion)
  .bind(new_product.precio)
  .bind(&new_product.imagen)
  .bind(&new_product.categoria)
  .bind(&fecha_creacion)
  .execute(&mut conn)
  .await
  .map_err(|e| {
    error!("Failed to insert product: {}", e);
    AppError::Sqlx(e)
  })?
  .last_insert_rowid();

  info!(producto_id, "Product created.");

  Ok(HttpResponse::Created().json(json!({
      "mensaje": PRODUCT_CREATED_MESSAGE,
      "producto_id": producto_id
  })))
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let mut conn = app_state.store.connect().await?;

  // No ORDER BY: rows come back in storage order.
  let products: Vec<Product> = sqlx::query_as("SELECT * FROM productos")
    .fetch_all(&mut conn)
    .await
    .map_err(|e| {
      error!("Failed to fetch products from database: {}", e);
      AppError::Sqlx(e)
    })?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(producto_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let producto_id = path.into_inner();

  let mut conn = app_state.store.connect().await?;

  let product: Option<Product> = sqlx::query_as("SELECT * FROM productos WHERE producto_id = ?")
    .bind(producto_id)
    .fetch_optional(&mut conn)
    .await
    .map_err(|e| {
      error!("Database error while fetching product {}: {}", producto_id, e);
      AppError::Sqlx(e)
    })?;

  match product {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", producto_id);
      Err(AppError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string()))
    }
  }
}
