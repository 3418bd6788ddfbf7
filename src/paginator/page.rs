//! A single page and its navigation metadata

use super::types::Paginator;
use crate::collection::Pageable;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of a [`Paginator`]
///
/// Nothing is cached: every accessor recomputes from the page number, the
/// page size and the source's current total, so calls may disagree if the
/// source changes in between.
pub struct Page<'a, S> {
    paginator: &'a Paginator<S>,
    number: usize,
}

impl<'a, S: Pageable> Page<'a, S> {
    pub(crate) fn new(paginator: &'a Paginator<S>, number: usize) -> Self {
        Self { paginator, number }
    }

    /// The paginator this page belongs to
    pub fn paginator(&self) -> &'a Paginator<S> {
        self.paginator
    }

    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Zero-based index of the first item, clamped to `[0, total]`
    pub fn offset(&self) -> usize {
        let total = self.paginator.count();
        self.number
            .saturating_sub(1)
            .saturating_mul(self.paginator.per_page())
            .min(total)
    }

    /// Number of items on this page
    ///
    /// `per_page` except on the last page, which holds the remainder, or a
    /// full `per_page` when the total divides evenly.
    pub fn num_items(&self) -> usize {
        let total = self.paginator.count();
        let per_page = self.paginator.per_page();
        let offset = self.offset();

        let mut count = per_page;
        if offset >= total.saturating_sub(per_page) {
            count = match total % per_page {
                0 => per_page,
                remainder => remainder,
            };
        }

        count.min(total.saturating_sub(offset))
    }

    /// 1-based index of the first item, or 0 for an empty page
    pub fn start_index(&self) -> usize {
        if self.num_items() == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based index of the last item
    pub fn end_index(&self) -> usize {
        self.offset() + self.num_items()
    }

    /// Previous page number, never below 1
    pub fn prev_page(&self) -> usize {
        self.number.saturating_sub(1).max(1)
    }

    /// Whether a page precedes this one
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    /// Next page number, never past the last page
    pub fn next_page(&self) -> usize {
        self.number
            .saturating_add(1)
            .min(self.paginator.num_pages().max(1))
    }

    /// Whether items remain after this page
    pub fn has_next(&self) -> bool {
        let total = self.paginator.count();
        self.offset().saturating_add(self.paginator.per_page()) < total
    }

    /// Whether this page has a neighbour in either direction
    pub fn has_other_pages(&self) -> bool {
        self.has_prev() || self.has_next()
    }

    /// Fetch this page's items from the source
    pub fn items(&self) -> Result<Vec<S::Item>> {
        let offset = self.offset();
        let count = self.num_items();
        tracing::trace!(page = self.number, offset, count, "fetching page items");
        self.paginator.source().item_range(offset, count)
    }

    /// Snapshot of the navigation metadata, ready to hand to a template
    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.number,
            per_page: self.paginator.per_page(),
            total_items: self.paginator.count(),
            num_pages: self.paginator.num_pages(),
            offset: self.offset(),
            num_items: self.num_items(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            prev_page: self.prev_page(),
            next_page: self.next_page(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
            has_other_pages: self.has_other_pages(),
        }
    }
}

impl<S> Clone for Page<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Page<'_, S> {}

impl<S> fmt::Debug for Page<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("per_page", &self.paginator.per_page())
            .finish_non_exhaustive()
    }
}

/// Serializable navigation metadata for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PageInfo {
    /// 1-based page number
    pub page: usize,
    /// Items per page
    pub per_page: usize,
    /// Total items in the source
    pub total_items: usize,
    /// Number of pages
    pub num_pages: usize,
    /// Zero-based index of the first item
    pub offset: usize,
    /// Items on this page
    pub num_items: usize,
    /// 1-based index of the first item (0 when empty)
    pub start_index: usize,
    /// 1-based index of the last item
    pub end_index: usize,
    /// Previous page number, saturating at 1
    pub prev_page: usize,
    /// Next page number, saturating at the last page
    pub next_page: usize,
    /// See [`Page::has_prev`]
    pub has_prev: bool,
    /// See [`Page::has_next`]
    pub has_next: bool,
    /// See [`Page::has_other_pages`]
    pub has_other_pages: bool,
}
