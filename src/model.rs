//! Request inputs accepted by the shop endpoints.

use serde::Deserialize;

/// Body of POST /products and PUT /products/:id.
#[derive(Clone, Debug, Deserialize)]
pub struct ProductInput {
    pub manufacturer_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
}

/// Body of PUT /customers/:id. Only contact fields are writable.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactInput {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Optional price bounds for GET /products.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
