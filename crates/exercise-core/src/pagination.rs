// ABOUTME: Offset pagination module converting page/size requests into skip/limit queries
// ABOUTME: Provides the paginated response envelope with total and total_pages metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Validated page request
///
/// Both `page` and `size` are strictly positive and `skip()` is guaranteed to
/// fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Validate a 1-based page number and a page size
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `page` or `size` is not positive, or if
    /// the resulting offset overflows.
    pub fn new(page: i64, size: i64) -> AppResult<Self> {
        if page <= 0 {
            return Err(AppError::invalid_input(format!(
                "page must be greater than 0, got {page}"
            )));
        }
        if size <= 0 {
            return Err(AppError::invalid_input(format!(
                "size must be greater than 0, got {size}"
            )));
        }
        if (page - 1).checked_mul(size).is_none() {
            return Err(AppError::invalid_input(format!(
                "page {page} with size {size} is out of range"
            )));
        }
        Ok(Self { page, size })
    }

    /// 1-based page number
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Maximum items per page
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Number of items preceding this page
    #[must_use]
    pub const fn skip(&self) -> i64 {
        (self.page - 1) * self.size
    }

    /// Maximum number of items to fetch
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size
    }
}

/// Number of pages needed to hold `total` items, `size` per page
///
/// A non-positive `total` yields zero pages. `size` must be positive.
#[must_use]
pub const fn total_pages(total: i64, size: i64) -> i64 {
    if total <= 0 || size <= 0 {
        return 0;
    }
    // Same as (total + size - 1) / size without the overflow near i64::MAX
    (total - 1) / size + 1
}

/// One page of items plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page: i64,
    /// Requested page size
    pub size: i64,
    /// Total number of items across all pages
    pub total: i64,
    /// Number of pages at this page size
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched items and a separately counted total
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
            total_pages: total_pages(total, request.size()),
        }
    }

    /// Convert every item, keeping the metadata
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}
