use async_trait::async_trait;

use crate::error::CartResult;
use crate::models::{Cart, CartItem};

/// Repository trait for Cart persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Get a cart by ID
    async fn get_by_id(&self, id: u64) -> CartResult<Option<Cart>>;

    /// Store a new empty cart under the next free id
    async fn create(&self) -> CartResult<Cart>;

    /// Add one unit of a product to a cart.
    ///
    /// Returns the affected item, or `None` if the cart does not exist.
    async fn add_product(&self, cart_id: u64, product_id: u64) -> CartResult<Option<CartItem>>;
}
