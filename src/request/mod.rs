//! Request parameter module
//!
//! Reads the page number out of an inbound request. This is the only part of
//! the crate that touches request data, and it never fails: a missing or
//! non-integer parameter means page 1.
//!
//! # Overview
//!
//! - [`PageRequest`] - Named parameter lookup over request-like values
//!   (query maps, `Uri`, `Request<B>`, axum `Query`)
//! - [`parse_page_number`] - The default-to-1 parsing policy
//! - [`PageNumber`] - Axum extractor applying the same policy to `?page=`

mod extract;
mod params;

pub use extract::PageNumber;
pub use params::{parse_page_number, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_PARAM};

#[cfg(test)]
mod tests;
