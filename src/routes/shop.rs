//! Shop endpoints. Static segments (`stats`, `search`, `category`) take precedence over `:id`.

use crate::handlers::{categories, customers, products, stats};
use crate::state::AppState;
use axum::{
    routing::{delete, get, put},
    Router,
};

pub fn shop_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/stats", get(stats::products))
        .route("/products/search", get(products::search))
        .route("/products/category/:category_id", get(products::by_category))
        .route(
            "/products/:id",
            get(products::read).put(products::update).delete(products::delete),
        )
        .route("/products/:id/reviews", delete(products::delete_reviews))
        .route("/customers/:id", get(customers::read).put(customers::update_contact))
        .route("/customers/:id/orders", get(customers::orders))
        .route("/reviews/stats", get(stats::reviews))
        .route("/categories/:category_id/products", put(categories::rebuild_links))
        .with_state(state)
}
