// negocio_api/src/models/mod.rs

//! Contains data structures representing database entities.

pub mod order;
pub mod order_detail;
pub mod product;

// Re-export the model structs for convenient access
pub use order::Order;
pub use order_detail::OrderDetail;
pub use product::{NewProduct, Product};
