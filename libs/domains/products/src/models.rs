use json_store::Record;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_status() -> bool {
    true
}

/// Product entity as stored in the products document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned on creation and never changed
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Unique across all products
    pub code: String,
    pub price: f64,
    /// Whether the product is available
    #[serde(default = "default_status")]
    pub status: bool,
    pub stock: i64,
    pub category: String,
    /// Image paths or URLs
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

impl Record for Product {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Request body for creating a product.
///
/// Every field is optional at the wire level so that missing ones can be
/// reported together instead of failing on the first.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Mechanical keyboard")]
    pub title: Option<String>,
    #[schema(example = "Tenkeyless, brown switches")]
    pub description: Option<String>,
    #[schema(example = "KB-TKL-01")]
    pub code: Option<String>,
    #[schema(example = 89.9)]
    pub price: Option<f64>,
    #[schema(example = 25)]
    pub stock: Option<i64>,
    #[schema(example = "peripherals")]
    pub category: Option<String>,
    /// Defaults to `true`
    pub status: Option<bool>,
    /// Defaults to an empty list
    pub thumbnails: Option<Vec<String>>,
}

/// Validated product fields, ready to be stored under a fresh id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub status: bool,
    pub thumbnails: Vec<String>,
}

impl NewProduct {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            code: self.code,
            price: self.price,
            status: self.status,
            stock: self.stock,
            category: self.category,
            thumbnails: self.thumbnails,
        }
    }
}

fn text(value: Option<String>, name: &'static str, missing: &mut Vec<String>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name.to_string());
            String::new()
        }
    }
}

impl CreateProduct {
    /// Check that every required field is present and non-empty.
    ///
    /// Strings must be non-empty and numbers non-zero. On failure the names
    /// of all offending fields are returned in declaration order.
    pub fn into_new_product(self) -> Result<NewProduct, Vec<String>> {
        let mut missing = Vec::new();

        let title = text(self.title, "title", &mut missing);
        let description = text(self.description, "description", &mut missing);
        let code = text(self.code, "code", &mut missing);
        let price = match self.price {
            Some(price) if price != 0.0 && !price.is_nan() => price,
            _ => {
                missing.push("price".to_string());
                0.0
            }
        };
        let stock = match self.stock {
            Some(stock) if stock != 0 => stock,
            _ => {
                missing.push("stock".to_string());
                0
            }
        };
        let category = text(self.category, "category", &mut missing);

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(NewProduct {
            title,
            description,
            code,
            price,
            stock,
            category,
            status: self.status.unwrap_or(true),
            thumbnails: self.thumbnails.unwrap_or_default(),
        })
    }
}

/// Request body for a partial update; absent or `null` fields are left as-is.
///
/// An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

fn assign<T: PartialEq>(target: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *target != value => {
            *target = value;
            true
        }
        _ => false,
    }
}

impl UpdateProduct {
    /// Apply the provided fields to `product`, returning whether anything changed
    pub fn apply_to(self, product: &mut Product) -> bool {
        let mut changed = false;
        changed |= assign(&mut product.title, self.title);
        changed |= assign(&mut product.description, self.description);
        changed |= assign(&mut product.code, self.code);
        changed |= assign(&mut product.price, self.price);
        changed |= assign(&mut product.status, self.status);
        changed |= assign(&mut product.stock, self.stock);
        changed |= assign(&mut product.category, self.category);
        changed |= assign(&mut product.thumbnails, self.thumbnails);
        changed
    }
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Maximum number of products to return; ignored unless a positive number
    pub limit: Option<String>,
}
