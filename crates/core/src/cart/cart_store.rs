//! In-memory cart store for hosts without their own cart.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use rust_decimal::Decimal;

use super::cart_model::CartLineItem;
use super::cart_traits::CartStoreTrait;
use crate::errors::{Error, Result};

#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    items: RwLock<Vec<CartLineItem>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_items(&self) -> RwLockReadGuard<'_, Vec<CartLineItem>> {
        self.items.read().unwrap_or_else(|poisoned| {
            warn!("Cart store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_items(&self) -> RwLockWriteGuard<'_, Vec<CartLineItem>> {
        self.items.write().unwrap_or_else(|poisoned| {
            warn!("Cart store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Removes a line item by id. Returns whether anything was removed.
    pub fn remove(&self, item_id: &str) -> bool {
        let mut items = self.write_items();
        let before = items.len();
        items.retain(|item| item.id != item_id);
        before != items.len()
    }

    pub fn clear(&self) {
        self.write_items().clear();
    }

    pub fn len(&self) -> usize {
        self.read_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_items().is_empty()
    }

    /// Sum of pledged amounts per currency.
    pub fn totals_by_currency(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for item in self.read_items().iter() {
            *totals.entry(item.currency.clone()).or_insert(Decimal::ZERO) += item.amount;
        }
        totals
    }
}

impl CartStoreTrait for InMemoryCartStore {
    fn append(&self, item: CartLineItem) -> Result<()> {
        if item.amount <= Decimal::ZERO {
            return Err(Error::Cart(format!(
                "Refusing non-positive amount {} for {}",
                item.amount, item.target_id
            )));
        }
        debug!(
            "[Cart] Adding {} {} for {} ({})",
            item.amount, item.currency, item.target_name, item.target_type
        );
        self.write_items().push(item);
        Ok(())
    }

    fn items(&self) -> Vec<CartLineItem> {
        self.read_items().clone()
    }
}
