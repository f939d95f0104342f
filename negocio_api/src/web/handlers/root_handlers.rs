// negocio_api/src/web/handlers/root_handlers.rs

use actix_web::HttpResponse;
use serde_json::json;
use tracing::instrument;

pub const ROOT_MESSAGE: &str = "Esta es la api de nuestra pagina";

#[instrument(name = "handler::root")]
pub async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "mensaje": ROOT_MESSAGE }))
}
