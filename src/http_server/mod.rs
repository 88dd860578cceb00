//! # shelfdb HTTP Server Module
//!
//! Stateless adapter from HTTP requests to product store calls.
//!
//! # Endpoints
//!
//! - `GET /products?limit=<N>` - list products
//! - `GET /products/:pid` - fetch one product
//!
//! Create, update and delete are store capabilities with no routes here.

pub mod config;
pub mod errors;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
