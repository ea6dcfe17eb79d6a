//! Carts Domain
//!
//! Shopping carts holding product references with quantities. Product ids are
//! not checked against the catalog; a cart may reference a product that no
//! longer exists.
//!
//! ```text
//! Handlers → CartService → CartRepository → JsonStore<Cart>
//! ```

pub mod error;
pub mod handlers;
pub mod json;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{CartError, CartResult};
pub use handlers::ApiDoc;
pub use json::JsonCartRepository;
pub use models::{Cart, CartItem};
pub use repository::CartRepository;
pub use service::CartService;
