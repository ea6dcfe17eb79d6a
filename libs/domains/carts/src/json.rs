//! JSON document implementation of [`CartRepository`]

use async_trait::async_trait;
use json_store::{next_id, Commit, JsonStore, StoreError};
use tracing::{debug, instrument};

use crate::error::CartResult;
use crate::models::{Cart, CartItem};
use crate::repository::CartRepository;

/// Cart repository backed by a single JSON collection document
#[derive(Clone, Debug)]
pub struct JsonCartRepository {
    store: JsonStore<Cart>,
}

impl JsonCartRepository {
    pub fn new(store: JsonStore<Cart>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonStore<Cart> {
        &self.store
    }
}

#[async_trait]
impl CartRepository for JsonCartRepository {
    #[instrument(skip(self), fields(cart_id = id))]
    async fn get_by_id(&self, id: u64) -> CartResult<Option<Cart>> {
        let cart = self
            .store
            .read(|carts| carts.iter().find(|c| c.id == id).cloned())
            .await?;
        Ok(cart)
    }

    #[instrument(skip(self))]
    async fn create(&self) -> CartResult<Cart> {
        let document = self.store.document();
        self.store
            .transaction(|carts| -> CartResult<_> {
                let id =
                    next_id(carts).ok_or_else(|| StoreError::id_space_exhausted(document))?;
                let cart = Cart::new(id);
                debug!(cart_id = cart.id, "Assigned cart id");
                carts.push(cart.clone());
                Ok(Commit::Save(cart))
            })
            .await
    }

    #[instrument(skip(self))]
    async fn add_product(&self, cart_id: u64, product_id: u64) -> CartResult<Option<CartItem>> {
        self.store
            .transaction(|carts| -> CartResult<_> {
                match carts.iter_mut().find(|c| c.id == cart_id) {
                    Some(cart) => Ok(Commit::Save(Some(cart.add_product(product_id)))),
                    None => Ok(Commit::Discard(None)),
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartError;
    use json_store::{FsBackend, MemoryBackend};
    use std::sync::Arc;

    fn memory_repository() -> (Arc<MemoryBackend>, JsonCartRepository) {
        let backend = Arc::new(MemoryBackend::new());
        let store = JsonStore::from_shared(backend.clone(), "carts.json");
        (backend, JsonCartRepository::new(store))
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let (_, repo) = memory_repository();

        assert_eq!(repo.create().await.unwrap(), Cart::new(1));
        assert_eq!(repo.create().await.unwrap(), Cart::new(2));
    }

    #[tokio::test]
    async fn test_create_after_max_id_fails_without_writing() {
        let seeded = format!(r#"[{{"id":{},"products":[]}}]"#, u64::MAX);
        let backend =
            Arc::new(MemoryBackend::new().with_document("carts.json", seeded.clone()));
        let repo =
            JsonCartRepository::new(JsonStore::from_shared(backend.clone(), "carts.json"));

        let err = repo.create().await.unwrap_err();

        assert!(matches!(
            err,
            CartError::Storage(StoreError::IdSpaceExhausted { .. })
        ));
        assert_eq!(backend.document("carts.json"), Some(seeded.into_bytes()));
    }

    #[tokio::test]
    async fn test_add_product_twice_increments_quantity() {
        let (_, repo) = memory_repository();
        let cart = repo.create().await.unwrap();

        repo.add_product(cart.id, 5).await.unwrap();
        let item = repo.add_product(cart.id, 5).await.unwrap().unwrap();

        assert_eq!(item, CartItem { id: 5, quantity: 2 });
        let stored = repo.get_by_id(cart.id).await.unwrap().unwrap();
        assert_eq!(stored.products, vec![CartItem { id: 5, quantity: 2 }]);
    }

    #[tokio::test]
    async fn test_add_product_to_missing_cart_writes_nothing() {
        let (backend, repo) = memory_repository();

        assert_eq!(repo.add_product(4, 1).await.unwrap(), None);
        assert_eq!(backend.document("carts.json"), None);
    }

    #[tokio::test]
    async fn test_carts_persist_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(FsBackend::new(dir.path()), "carts.json");
        let repo = JsonCartRepository::new(store);
        let cart = repo.create().await.unwrap();
        repo.add_product(cart.id, 8).await.unwrap();

        let reopened = JsonCartRepository::new(JsonStore::new(
            FsBackend::new(dir.path()),
            "carts.json",
        ));
        let stored = reopened.get_by_id(cart.id).await.unwrap().unwrap();
        assert_eq!(stored.products, vec![CartItem { id: 8, quantity: 1 }]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_are_not_lost() {
        let (_, repo) = memory_repository();
        let cart = repo.create().await.unwrap();

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add_product(cart.id, 3).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = repo.get_by_id(cart.id).await.unwrap().unwrap();
        assert_eq!(stored.products, vec![CartItem { id: 3, quantity: 20 }]);
    }
}
