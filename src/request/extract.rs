//! Axum extractor for the page number

use super::params::{parse_page_number, PageRequest, DEFAULT_PAGE_PARAM};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Raw page number taken from the `page` query parameter
///
/// Never rejects a request: absent or malformed values become page 1. Pass
/// the number to `Paginator::get_page_number` to clamp it into range.
///
/// The parameter name is fixed to `page`. A `page_param` set through
/// [`PaginationConfig`](crate::PaginationConfig) or
/// `Paginator::with_page_param` has no effect here; use
/// `Paginator::get_page` with the request or its `Query` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(
    /// Parsed, unclamped page number
    pub i64,
);

impl PageNumber {
    /// Read the page number from request parts
    pub fn from_parts(parts: &Parts) -> Self {
        Self(parse_page_number(parts.param(DEFAULT_PAGE_PARAM).as_deref()))
    }

    /// The parsed (unclamped) page number
    pub fn get(self) -> i64 {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageNumber
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
