//! # paginate
//!
//! Page/offset arithmetic and navigation metadata over any countable,
//! sliceable collection.
//!
//! ## Features
//!
//! - **Bring your own storage**: implement [`Pageable`] (total count + range
//!   fetch) for any data source; `Vec`, slices and `VecDeque` work out of the box
//! - **Never errors on navigation**: out-of-range page numbers clamp to the
//!   nearest valid page, malformed `?page=` values fall back to page 1
//! - **Renderer friendly**: [`PageInfo`] serializes every navigation field
//! - **Axum integration**: read the page number from a `Uri`, `Request` or
//!   `Query`, or extract it directly with [`PageNumber`]
//!
//! ## Quick Start
//!
//! ```rust
//! use paginate::{Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let beatles = vec!["john", "paul", "george", "ringo"];
//!     let paginator = Paginator::new(&beatles, 2)?;
//!
//!     let page = paginator.get_page_number(2);
//!     assert_eq!(page.items()?, vec!["george", "ringo"]);
//!     assert_eq!((page.start_index(), page.end_index()), (3, 4));
//!     assert!(page.has_prev() && !page.has_next());
//!
//!     // Out of range: clamped to the last page
//!     assert_eq!(paginator.get_page_number(10).number(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐    get_page_number(n) / get_page(&request)
//! │ Paginator<S>        │ ───────────────────────────────────────────┐
//! │  source: S          │                                            ▼
//! │  per_page           │                               ┌──────────────────────┐
//! └──────────┬──────────┘                               │ Page<'_, S>          │
//!            │ total_items()                            │  offset / num_items  │
//!            │ item_range(offset, count)                │  prev / next / info  │
//!            ▼                                          └──────────────────────┘
//! ┌─────────────────────┐
//! │ S: Pageable         │
//! └─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Collection adapter trait and built-in adapters
pub mod collection;

/// Paginator and page arithmetic
pub mod paginator;

/// Page number extraction from requests
pub mod request;

/// Paginator configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use collection::Pageable;
pub use config::PaginationConfig;
pub use error::{Error, Result, ResultExt};
pub use paginator::{Page, PageInfo, Paginator};
pub use request::{PageNumber, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
