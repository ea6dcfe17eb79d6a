//! Cart Service - Business logic layer

use json_store::parse_id;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{CartError, CartResult};
use crate::models::{Cart, CartItem};
use crate::repository::CartRepository;

/// Cart service providing business logic operations
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
}

fn parse(raw: &str) -> CartResult<u64> {
    parse_id(raw).ok_or_else(|| CartError::InvalidId(raw.to_string()))
}

impl<R: CartRepository> CartService<R> {
    /// Create a new CartService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a cart by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> CartResult<Cart> {
        let id = parse(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CartError::NotFound(id))
    }

    /// Create an empty cart
    #[instrument(skip(self))]
    pub async fn create(&self) -> CartResult<Cart> {
        self.repository.create().await
    }

    /// Add one unit of a product to a cart and return the affected item.
    ///
    /// Blank ids are reported as missing before either id is parsed.
    #[instrument(skip(self))]
    pub async fn add_product(&self, cart_id: &str, product_id: &str) -> CartResult<CartItem> {
        let missing: Vec<String> = [("cartId", cart_id), ("productId", product_id)]
            .into_iter()
            .filter(|(_, raw)| raw.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CartError::MissingFields(missing));
        }

        let cart_id = parse(cart_id)?;
        let product_id = parse(product_id)?;

        self.repository
            .add_product(cart_id, product_id)
            .await?
            .ok_or(CartError::NotFound(cart_id))
    }
}

impl<R: CartRepository> Clone for CartService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCartRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_get_cart() {
        let mut mock_repo = MockCartRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(Cart::new(id))));
        mock_repo.expect_get_by_id().with(eq(2)).returning(|_| Ok(None));

        let service = CartService::new(mock_repo);

        assert_eq!(service.get("1").await.unwrap(), Cart::new(1));
        assert!(matches!(service.get("2").await, Err(CartError::NotFound(2))));
        assert!(matches!(service.get("x").await, Err(CartError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_add_product_blank_ids_are_missing() {
        let service = CartService::new(MockCartRepository::new());

        let result = service.add_product(" ", "").await;

        assert!(
            matches!(result, Err(CartError::MissingFields(ref fields)) if fields == &["cartId", "productId"])
        );
    }

    #[tokio::test]
    async fn test_add_product_invalid_product_id() {
        let service = CartService::new(MockCartRepository::new());

        let result = service.add_product("1", "nope").await;

        assert!(matches!(result, Err(CartError::InvalidId(ref raw)) if raw == "nope"));
    }

    #[tokio::test]
    async fn test_add_product_missing_cart() {
        let mut mock_repo = MockCartRepository::new();
        mock_repo
            .expect_add_product()
            .with(eq(9), eq(1))
            .returning(|_, _| Ok(None));

        let service = CartService::new(mock_repo);

        assert!(matches!(
            service.add_product("9", "1").await,
            Err(CartError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_add_product_returns_item() {
        let mut mock_repo = MockCartRepository::new();
        mock_repo
            .expect_add_product()
            .times(1)
            .returning(|_, product_id| {
                Ok(Some(CartItem {
                    id: product_id,
                    quantity: 1,
                }))
            });

        let service = CartService::new(mock_repo);
        let item = service.add_product("1", "4").await.unwrap();

        assert_eq!(item, CartItem { id: 4, quantity: 1 });
    }
}
