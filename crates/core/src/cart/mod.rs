//! Cart module - line items appended by cart-add swipes.

mod cart_model;
mod cart_store;
mod cart_traits;

pub use cart_model::CartLineItem;
pub use cart_store::InMemoryCartStore;
pub use cart_traits::CartStoreTrait;
