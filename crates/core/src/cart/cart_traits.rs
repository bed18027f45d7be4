use crate::cart::cart_model::CartLineItem;
use crate::errors::Result;

/// Append-only view of the funding cart used by the swipe engine.
///
/// The cart itself belongs to the host application; the engine only ever
/// appends to it.
pub trait CartStoreTrait: Send + Sync {
    fn append(&self, item: CartLineItem) -> Result<()>;

    fn items(&self) -> Vec<CartLineItem>;
}
