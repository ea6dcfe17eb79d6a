//! Application state management.
//!
//! One store per collection document is opened at startup and shared by
//! every handler through clones. Clones share the document lock.

use domain_carts::Cart;
use domain_products::Product;
use json_store::{FsBackend, JsonStore};
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    pub products: JsonStore<Product>,
    pub carts: JsonStore<Cart>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(FsBackend::new(&config.storage.data_dir));
        let products = JsonStore::from_shared(backend.clone(), &config.storage.products_file);
        let carts = JsonStore::from_shared(backend, &config.storage.carts_file);

        Self {
            config,
            products,
            carts,
        }
    }
}
