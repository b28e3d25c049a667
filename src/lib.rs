//! TechGear web shop: REST endpoints over a SQLite catalogue of products, customers, orders and reviews.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::rebuild_products_categories;
pub use routes::{app, common_routes, shop_routes};
pub use service::{ShopStore, SqliteShop};
pub use state::AppState;
pub use store::{connect, ensure_schema};
