//! Total order over entities carrying an optional numeric position.
//!
//! Display order is induced by the `order` field: defined positions sort
//! ascending and come before undefined ones; ties keep their relative input
//! order (the sort is stable), which is what makes repeated sorts
//! idempotent.

use crate::types::{Card, Column};
use std::cmp::Ordering;

/// An entity with an identifier and an optional display position
pub trait Orderable {
    /// The entity's identifier
    fn id(&self) -> &str;
    /// The entity's display position, if assigned
    fn sort_order(&self) -> Option<i64>;
}

impl Orderable for Column {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_order(&self) -> Option<i64> {
        self.order
    }
}

impl Orderable for Card {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_order(&self) -> Option<i64> {
        self.order
    }
}

/// Sort items ascending by `order`, defined positions first, stable on ties
pub fn sort_by_order<T: Orderable + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| match (a.sort_order(), b.sort_order()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Map a sequence of items to their identifier sequence, preserving order
pub fn ids_of<T: Orderable>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}
