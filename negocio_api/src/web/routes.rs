// negocio_api/src/web/routes.rs

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, root_handlers};

// Body and path extraction failures surface as 422, before the handler runs.
// A body without Content-Type is still parsed as JSON; a non-JSON type is rejected.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(err.to_string()).into()
}

/// Called from `main.rs` (and the integration tests) to mount every route.
/// Resources answer 405 for methods they do not route.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(
      web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(web::resource("/").route(web::get().to(root_handlers::root_handler)))
    .service(
      web::resource("/productos")
        .route(web::get().to(product_handlers::list_products_handler))
        .route(web::post().to(product_handlers::create_product_handler)),
    )
    .service(
      web::resource("/productos/{producto_id}").route(web::get().to(product_handlers::get_product_handler)),
    );
}
