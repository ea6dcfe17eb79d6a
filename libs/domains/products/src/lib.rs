//! Products Domain
//!
//! Product catalog backed by a JSON collection document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Id parsing, required fields, list limit
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + JSON store implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, JsonProductRepository, ProductService};
//! use json_store::{FsBackend, JsonStore};
//!
//! let store = JsonStore::new(FsBackend::new("./data"), "products.json");
//! let service = ProductService::new(JsonProductRepository::new(store));
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod json;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use json::JsonProductRepository;
pub use models::{CreateProduct, ListQuery, NewProduct, Product, UpdateProduct};
pub use repository::ProductRepository;
pub use service::ProductService;
