//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page number when `page` is absent or unusable.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when `limit` is absent or unusable.
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination query parameters for list endpoints.
///
/// Both values are taken as raw strings so that garbage such as `?page=abc`
/// or `?limit=-5` falls back to the defaults instead of failing the request.
/// When a key repeats, its first occurrence wins.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number (1-indexed). Defaults to 1.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Items per page. Defaults to 10.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

/// Resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-indexed page number.
    pub page: u32,
    /// Page size, at least 1.
    pub limit: u32,
}

impl Page {
    /// Number of rows to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

impl ListParams {
    /// Collects `page` and `limit` from decoded query pairs, ignoring every
    /// other key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if params.page.is_none() => params.page = Some(value),
                "limit" if params.limit.is_none() => params.limit = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Applies defaults to missing, unparseable, or non-positive values.
    #[must_use]
    pub fn resolve(&self) -> Page {
        Page {
            page: positive_or(self.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(self.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// Human-readable status message, optionally naming the affected book.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Status text, e.g. `"Book created"`.
    pub message: String,
    /// Identifier of the created book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<crate::domain::BookId>,
}

impl MessageResponse {
    /// Message without an identifier.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }
}
