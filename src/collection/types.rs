//! Collection adapter trait

use crate::error::Result;

/// A countable, sliceable source of items
///
/// The total count may change between calls; every page accessor re-reads it.
pub trait Pageable {
    /// Item type handed back by [`Pageable::item_range`]
    type Item;

    /// Current total number of items
    fn total_items(&self) -> usize;

    /// Fetch `count` items starting at the zero-based `offset`
    ///
    /// Pages only ask for windows inside `[0, total_items()]`. What happens
    /// when `offset + count` runs past the end is up to the implementation.
    fn item_range(&self, offset: usize, count: usize) -> Result<Vec<Self::Item>>;
}
