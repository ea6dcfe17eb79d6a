use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations own the uniqueness and id-assignment rules, since both
/// have to be decided against the stored collection in one step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in stored order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Store a new product under the next free id.
    ///
    /// Fails with `DuplicateCode` if another product already uses its code.
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Apply a partial update, returning `None` if the product does not exist
    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove a product, returning the removed record
    async fn delete(&self, id: u64) -> ProductResult<Option<Product>>;
}
