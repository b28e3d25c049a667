//! HTTP handlers, one per shop endpoint.

pub mod categories;
pub mod customers;
pub mod products;
pub mod stats;
