//! JSON document implementation of [`ProductRepository`]

use async_trait::async_trait;
use json_store::{next_id, Commit, JsonStore, StoreError};
use tracing::{debug, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product repository backed by a single JSON collection document
#[derive(Clone, Debug)]
pub struct JsonProductRepository {
    store: JsonStore<Product>,
}

impl JsonProductRepository {
    pub fn new(store: JsonStore<Product>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonStore<Product> {
        &self.store
    }
}

#[async_trait]
impl ProductRepository for JsonProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.load().await?)
    }

    #[instrument(skip(self), fields(product_id = id))]
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let product = self
            .store
            .read(|products| products.iter().find(|p| p.id == id).cloned())
            .await?;
        Ok(product)
    }

    #[instrument(skip(self, input), fields(code = %input.code))]
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let document = self.store.document();
        self.store
            .transaction(|products| {
                if products.iter().any(|p| p.code == input.code) {
                    return Err(ProductError::DuplicateCode(input.code));
                }

                let id =
                    next_id(products).ok_or_else(|| StoreError::id_space_exhausted(document))?;
                let product = input.into_product(id);
                debug!(product_id = product.id, "Assigned product id");
                products.push(product.clone());
                Ok(Commit::Save(product))
            })
            .await
    }

    #[instrument(skip(self, input), fields(product_id = id))]
    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Option<Product>> {
        self.store
            .transaction(|products| -> ProductResult<_> {
                let Some(product) = products.iter_mut().find(|p| p.id == id) else {
                    return Ok(Commit::Discard(None));
                };

                if input.apply_to(product) {
                    Ok(Commit::Save(Some(product.clone())))
                } else {
                    Ok(Commit::Discard(Some(product.clone())))
                }
            })
            .await
    }

    #[instrument(skip(self), fields(product_id = id))]
    async fn delete(&self, id: u64) -> ProductResult<Option<Product>> {
        self.store
            .transaction(|products| -> ProductResult<_> {
                match products.iter().position(|p| p.id == id) {
                    Some(index) => Ok(Commit::Save(Some(products.remove(index)))),
                    None => Ok(Commit::Discard(None)),
                }
            })
            .await
    }
}
