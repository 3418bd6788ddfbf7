//! Page parameter lookup and parsing

use axum::extract::Query;
use axum::http::request::Parts;
use axum::http::{Request, Uri};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Conventional name of the page number parameter
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Page used when the parameter is absent or not an integer
pub const DEFAULT_PAGE: i64 = 1;

/// Anything a single named parameter can be read from
pub trait PageRequest {
    /// First value of the parameter `name`, if present
    fn param(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Parse a raw page parameter, falling back to [`DEFAULT_PAGE`]
///
/// The value is not range-checked here; out-of-range numbers (including zero
/// and negatives) are clamped later by the paginator.
pub fn parse_page_number(raw: Option<&str>) -> i64 {
    match raw {
        Some(value) => value.parse::<i64>().unwrap_or_else(|_| {
            tracing::debug!(value, "page parameter is not an integer, using page {DEFAULT_PAGE}");
            DEFAULT_PAGE
        }),
        None => DEFAULT_PAGE,
    }
}

// ============================================================================
// Query maps
// ============================================================================

impl<H: BuildHasher> PageRequest for HashMap<String, String, H> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl PageRequest for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl<T: PageRequest> PageRequest for Query<T> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0.param(name)
    }
}

impl<T: PageRequest + ?Sized> PageRequest for &T {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).param(name)
    }
}

// ============================================================================
// HTTP requests
// ============================================================================

impl PageRequest for Uri {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        let query = self.query()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

impl<B> PageRequest for Request<B> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.uri().param(name)
    }
}

impl PageRequest for Parts {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.uri.param(name)
    }
}
