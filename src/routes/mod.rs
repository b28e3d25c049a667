//! Route tables and application assembly.

mod common;
mod shop;

pub use common::common_routes;
pub use shop::shop_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common and shop routes behind a body-size limit and request tracing.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(shop_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
