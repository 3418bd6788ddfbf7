//! Paginator configuration
//!
//! Page size and request parameter name, usually embedded in a larger
//! application config file and loaded from YAML or JSON.
//!
//! ```yaml
//! per_page: 25
//! page_param: p
//! ```

use crate::error::{Error, Result};
use crate::request::DEFAULT_PAGE_PARAM;
use serde::{Deserialize, Serialize};

/// Default page size
pub const DEFAULT_PER_PAGE: usize = 20;

/// Configuration for a [`Paginator`](crate::Paginator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Name of the request parameter carrying the page number
    #[serde(default = "default_page_param")]
    pub page_param: String,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_page_param() -> String {
    DEFAULT_PAGE_PARAM.to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page_param: default_page_param(),
        }
    }
}

impl PaginationConfig {
    /// Create a config with the given page size and the default parameter name
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            ..Default::default()
        }
    }

    /// Set the page parameter name
    #[must_use]
    pub fn with_page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the page size is positive and the parameter name usable
    pub fn validate(&self) -> Result<()> {
        validate_per_page(self.per_page)?;
        validate_page_param(&self.page_param)
    }
}

/// Reject an empty parameter name or one containing query syntax
pub(crate) fn validate_page_param(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_value("page_param", "must not be empty"));
    }
    if name.contains(['&', '=', '?', '#']) {
        return Err(Error::config(format!(
            "page parameter name '{name}' contains a reserved query character"
        )));
    }
    Ok(())
}

/// Reject a zero page size
pub(crate) fn validate_per_page(per_page: usize) -> Result<()> {
    if per_page == 0 {
        return Err(Error::invalid_value(
            "per_page",
            "must be greater than zero",
        ));
    }
    Ok(())
}
