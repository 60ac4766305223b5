use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{ItemKey, ShoppingItem};

/// Check marks for a shopping list, owned by the caller.
///
/// The list itself is recomputed from scratch on every aggregation, so
/// check state is keyed by [`ItemKey`] and reconciled against each fresh
/// list: keys that disappeared are dropped, new items start unchecked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    checked: BTreeSet<ItemKey>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, item: &ShoppingItem) -> bool {
        self.checked.contains(&item.key())
    }

    pub fn set_checked(&mut self, item: &ShoppingItem, checked: bool) {
        if checked {
            self.checked.insert(item.key());
        } else {
            self.checked.remove(&item.key());
        }
    }

    /// Flip the check mark and return the new state.
    pub fn toggle(&mut self, item: &ShoppingItem) -> bool {
        let checked = !self.is_checked(item);
        self.set_checked(item, checked);
        checked
    }

    /// Forget check marks for items not present in `items`. Returns how
    /// many were dropped.
    pub fn reconcile(&mut self, items: &[ShoppingItem]) -> usize {
        let present: BTreeSet<ItemKey> = items.iter().map(ShoppingItem::key).collect();
        let before = self.checked.len();
        self.checked.retain(|key| present.contains(key));
        before - self.checked.len()
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}
