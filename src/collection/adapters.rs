//! Built-in adapters for std collections and smart pointers

use super::types::Pageable;
use crate::error::Result;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// In-memory collections
// ============================================================================

impl<T: Clone> Pageable for [T] {
    type Item = T;

    fn total_items(&self) -> usize {
        self.len()
    }

    fn item_range(&self, offset: usize, count: usize) -> Result<Vec<T>> {
        let start = offset.min(self.len());
        let end = start.saturating_add(count).min(self.len());
        Ok(self[start..end].to_vec())
    }
}

impl<T: Clone> Pageable for Vec<T> {
    type Item = T;

    fn total_items(&self) -> usize {
        self.len()
    }

    fn item_range(&self, offset: usize, count: usize) -> Result<Vec<T>> {
        self.as_slice().item_range(offset, count)
    }
}

impl<T: Clone> Pageable for VecDeque<T> {
    type Item = T;

    fn total_items(&self) -> usize {
        self.len()
    }

    fn item_range(&self, offset: usize, count: usize) -> Result<Vec<T>> {
        Ok(self.iter().skip(offset).take(count).cloned().collect())
    }
}

// ============================================================================
// Forwarding impls
// ============================================================================

macro_rules! forward_pageable {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<P: Pageable + ?Sized> Pageable for $ptr {
                type Item = P::Item;

                fn total_items(&self) -> usize {
                    (**self).total_items()
                }

                fn item_range(&self, offset: usize, count: usize) -> Result<Vec<Self::Item>> {
                    (**self).item_range(offset, count)
                }
            }
        )*
    };
}

forward_pageable!(&P, Box<P>, Rc<P>, Arc<P>);
