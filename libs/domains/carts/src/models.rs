use json_store::Record;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One product line in a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    /// Referenced product id
    pub id: u64,
    /// Always at least 1
    pub quantity: u32,
}

/// Cart entity as stored in the carts document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: u64,
    /// Items in insertion order, at most one per product id
    #[serde(default)]
    pub products: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }

    /// Add one unit of `product_id`, merging with an existing line
    pub fn add_product(&mut self, product_id: u64) -> CartItem {
        match self.products.iter_mut().find(|item| item.id == product_id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                *item
            }
            None => {
                let item = CartItem {
                    id: product_id,
                    quantity: 1,
                };
                self.products.push(item);
                item
            }
        }
    }
}

impl Record for Cart {
    fn id(&self) -> u64 {
        self.id
    }
}
