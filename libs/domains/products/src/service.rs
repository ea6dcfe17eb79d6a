//! Product Service - Business logic layer

use json_store::parse_id;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Ids arrive as raw path segments and are parsed here, so every operation
/// reports malformed ids the same way.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

fn product_id(raw: &str) -> ProductResult<u64> {
    parse_id(raw).ok_or_else(|| ProductError::InvalidId(raw.to_string()))
}

/// Interpret the `limit` query value.
///
/// Returns `None` (no limit) when it is absent, not a number, not positive
/// or infinite. Fractional values are truncated.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_nan() || value <= 0.0 || value.is_infinite() {
        return None;
    }
    Some(value.trunc() as usize)
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products in stored order, optionally truncated to `limit`
    #[instrument(skip(self))]
    pub async fn list(&self, limit: Option<&str>) -> ProductResult<Vec<Product>> {
        let mut products = self.repository.list().await?;
        if products.is_empty() {
            return Err(ProductError::EmptyCollection);
        }

        if let Some(limit) = parse_limit(limit) {
            products.truncate(limit);
        }
        Ok(products)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ProductResult<Product> {
        let id = product_id(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let new_product = input
            .into_new_product()
            .map_err(ProductError::MissingFields)?;

        self.repository.create(new_product).await
    }

    /// Update an existing product
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let id = product_id(id)?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ProductResult<Product> {
        let id = product_id(id)?;
        self.repository
            .delete(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
