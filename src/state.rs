//! Shared application state for all routes.

use crate::service::ShopStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected storage client; `SqliteShop` in production, doubles in tests.
    pub store: Arc<dyn ShopStore>,
}

impl AppState {
    pub fn new<S: ShopStore + 'static>(store: S) -> Self {
        AppState { store: Arc::new(store) }
    }
}
