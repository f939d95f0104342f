// negocio_api/src/state.rs
use crate::db::Store;

/// Shared with every handler. Holds no open connection and no mutable state.
#[derive(Clone)]
pub struct AppState {
  pub store: Store,
}
