// negocio_api/src/models/product.rs

use chrono::Local;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row of `productos`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub producto_id: i64,
  pub nombre: String,
  pub descripcion: Option<String>,
  pub precio: f64, // REAL column, integer input is widened on insert
  pub imagen: Option<String>,
  pub categoria: String,
  pub fecha_creacion: String,
}

/// Request body for `POST /productos`. Every field is required and typed;
/// serde rejects the payload before any handler code runs.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
  pub nombre: String,
  pub descripcion: String,
  #[serde(deserialize_with = "deserialize_lax_int")]
  pub precio: i64,
  pub imagen: String,
  pub categoria: String,
}

/// Accepts `10`, `10.0` and `"10"` as the integer 10. Fractional or non-numeric values are rejected.
fn deserialize_lax_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum LaxInt {
    Int(i64),
    Float(f64),
    Text(String),
  }

  let parsed = match LaxInt::deserialize(deserializer)? {
    LaxInt::Int(n) => Some(n),
    LaxInt::Float(f) => whole_number(f),
    LaxInt::Text(s) => {
      let s = s.trim();
      s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(whole_number))
    }
  };

  parsed.ok_or_else(|| D::Error::custom("precio must be a valid integer"))
}

fn whole_number(f: f64) -> Option<i64> {
  let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
  (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Local wall-clock time in ISO-8601 with microseconds, e.g. `2024-05-01T13:45:10.123456`.
pub fn creation_timestamp() -> String {
  Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
