//! Paginator module
//!
//! Page arithmetic over a [`Pageable`](crate::Pageable) source.
//!
//! # Overview
//!
//! A [`Paginator`] pairs an item source with a fixed page size. It hands out
//! [`Page`] views keyed by page number; each page derives its offset, item
//! count and navigation links from the source's current total on every call.
//!
//! Out-of-range page numbers never produce an error. They are clamped to the
//! nearest valid page, so a stale or hand-edited `?page=` link still renders.

mod page;
mod types;

pub use page::{Page, PageInfo};
pub use types::Paginator;
