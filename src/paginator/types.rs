//! Paginator: page size plus item source

use super::page::Page;
use crate::collection::Pageable;
use crate::config::{validate_page_param, validate_per_page, PaginationConfig};
use crate::error::Result;
use crate::request::{parse_page_number, PageRequest, DEFAULT_PAGE_PARAM};
use std::ops::RangeInclusive;
use tracing::debug;

/// Splits an item source into fixed-size, 1-based pages
///
/// The source is held by value; pass `&source` or an `Arc` to keep sharing it.
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    source: S,
    per_page: usize,
    page_param: String,
}

impl<S> Paginator<S> {
    /// Read the page number from a differently named request parameter
    ///
    /// The name is checked the same way as [`PaginationConfig::validate`].
    pub fn with_page_param(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_page_param(&name)?;
        self.page_param = name;
        Ok(self)
    }

    /// The underlying item source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Items per page
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Request parameter consulted by [`Paginator::get_page`]
    pub fn page_param(&self) -> &str {
        &self.page_param
    }
}

impl<S: Pageable> Paginator<S> {
    /// Create a paginator with `per_page` items per page
    ///
    /// Fails with [`Error::InvalidConfigValue`](crate::Error::InvalidConfigValue)
    /// when `per_page` is zero.
    pub fn new(source: S, per_page: usize) -> Result<Self> {
        validate_per_page(per_page)?;
        Ok(Self {
            source,
            per_page,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        })
    }

    /// Create a paginator from a validated config
    pub fn from_config(source: S, config: &PaginationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            per_page: config.per_page,
            page_param: config.page_param.clone(),
        })
    }

    /// Total number of items, re-read from the source on every call
    pub fn count(&self) -> usize {
        self.source.total_items()
    }

    /// Number of pages; zero for an empty source
    pub fn num_pages(&self) -> usize {
        self.count().div_ceil(self.per_page)
    }

    /// Every valid page number, ascending (`1..=num_pages()`)
    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.num_pages()
    }

    /// Page `number`, clamped into `[1, num_pages()]`
    ///
    /// An empty source still yields page 1, which holds no items.
    pub fn get_page_number(&self, number: i64) -> Page<'_, S> {
        let last = self.num_pages().max(1);
        let clamped = if number < 1 {
            1
        } else {
            usize::try_from(number).map_or(last, |n| n.min(last))
        };

        if usize::try_from(number).ok() != Some(clamped) {
            debug!(requested = number, page = clamped, last, "page number out of range, clamping");
        }

        Page::new(self, clamped)
    }

    /// Page named by the request's page parameter
    ///
    /// A missing or non-integer parameter selects page 1.
    pub fn get_page<R: PageRequest + ?Sized>(&self, request: &R) -> Page<'_, S> {
        let raw = request.param(&self.page_param);
        self.get_page_number(parse_page_number(raw.as_deref()))
    }

    /// Iterate over every page in order
    pub fn pages(&self) -> impl Iterator<Item = Page<'_, S>> + '_ {
        self.page_range().map(move |number| Page::new(self, number))
    }
}
