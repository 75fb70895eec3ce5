//! Page windowing over a countable collection.
//!
//! [`Paginator::paginate`] resolves the requested page and page size
//! (explicit arguments first, then query parameters, then configured
//! defaults), enforces the configured limits, and returns the windowed
//! items together with a [`PaginationDescriptor`].
//!
//! Limit handling distinguishes caller mistakes from client input:
//!
//! - An explicit `page_size` above `max_page_size`, or a bounded
//!   `max_records` below `max_page_size`, is an error.
//! - A query-sourced `page_size` above `max_page_size` is clamped, and a
//!   page reaching past `max_records` is redirected to the last page that
//!   stays inside the cap. Neither is reported to the client.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::params::{get_int, ParamSource};

pub const DEFAULT_MAX_PAGE_SIZE: u64 = 50;
pub const DEFAULT_MAX_RECORDS: u64 = 1000;
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Query parameter carrying the 1-indexed page number.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the page size.
pub const PAGE_SIZE_PARAM: &str = "page_size";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Upper bound on how deep into a collection clients may page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLimit {
    Unlimited,
    AtMost(u64),
}

impl RecordLimit {
    /// Interpret the conventional integer form: any negative value (usually
    /// `-1`) is unlimited, `0` selects the default cap.
    pub fn from_raw(raw: i64) -> Self {
        match u64::try_from(raw) {
            Err(_) => RecordLimit::Unlimited,
            Ok(0) => RecordLimit::default(),
            Ok(limit) => RecordLimit::AtMost(limit),
        }
    }

    pub fn bound(self) -> Option<u64> {
        match self {
            RecordLimit::Unlimited => None,
            RecordLimit::AtMost(limit) => Some(limit),
        }
    }
}

impl Default for RecordLimit {
    fn default() -> Self {
        RecordLimit::AtMost(DEFAULT_MAX_RECORDS)
    }
}

/// Limits and defaults applied by a [`Paginator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    pub max_page_size: u64,
    pub max_records: RecordLimit,
    /// Page used when the query string has none (or an unparseable one).
    pub default_page: u64,
    /// Page size used when the query string has none (or an unparseable one).
    pub default_page_size: u64,
    /// Reject malformed `page`/`page_size` values instead of falling back.
    pub raise_on_value_error: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            max_records: RecordLimit::default(),
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
            raise_on_value_error: false,
        }
    }
}

/// Per-call overrides. Unset fields come from the query string or the
/// [`PaginationConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub max_page_size: Option<u64>,
    pub max_records: Option<RecordLimit>,
}

impl PageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a page, ignoring the query string.
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Force a page size, ignoring the query string. Must not exceed the
    /// effective `max_page_size`.
    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = Some(max_page_size);
        self
    }

    pub fn max_records(mut self, max_records: RecordLimit) -> Self {
        self.max_records = Some(max_records);
        self
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Position of a page window within the full collection.
///
/// `from` and `to` are 1-indexed item numbers; both are `0` when the
/// window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub last_page: u64,
    pub from: u64,
    pub to: u64,
}

impl PaginationDescriptor {
    /// Number of items in the window.
    pub fn len(&self) -> u64 {
        if self.to == 0 {
            0
        } else {
            self.to.saturating_sub(self.from) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based index of the first item in the window.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// The items of one page window.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationDescriptor,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            pagination: self.pagination,
        })
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// A countable, sliceable source of items.
///
/// A query-backed implementation would issue a `COUNT` and an
/// `OFFSET/LIMIT` fetch.
pub trait Collection {
    type Item;

    fn count(&self) -> u64;

    /// Up to `limit` items starting at zero-based `offset`.
    fn slice(&self, offset: u64, limit: u64) -> Vec<Self::Item>;
}

impl<'a, T> Collection for &'a [T] {
    type Item = &'a T;

    fn count(&self) -> u64 {
        u64::try_from(self.len()).unwrap_or(u64::MAX)
    }

    fn slice(&self, offset: u64, limit: u64) -> Vec<&'a T> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.iter().skip(offset).take(limit).collect()
    }
}

impl<'a, T> Collection for &'a Vec<T> {
    type Item = &'a T;

    fn count(&self) -> u64 {
        let items: &'a [T] = self.as_slice();
        items.count()
    }

    fn slice(&self, offset: u64, limit: u64) -> Vec<&'a T> {
        let items: &'a [T] = self.as_slice();
        items.slice(offset, limit)
    }
}

// ---------------------------------------------------------------------------
// Paginator
// ---------------------------------------------------------------------------

/// Page number and size after validation, clamping, and the record cap,
/// but before the collection size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: u64,
    pub page_size: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Resolve the effective page and page size for a request.
    pub fn resolve<P: ParamSource + ?Sized>(
        &self,
        request: &PageRequest,
        params: &P,
    ) -> Result<ResolvedPage, CoreError> {
        let max_page_size = request.max_page_size.unwrap_or(self.config.max_page_size);
        let max_records = request.max_records.unwrap_or(self.config.max_records);
        let strict = self.config.raise_on_value_error;

        if let Some(explicit) = request.page_size {
            if explicit < 1 {
                return Err(CoreError::InvalidPageSize(explicit));
            }
            if u64::try_from(explicit).map_or(true, |size| size > max_page_size) {
                return Err(CoreError::PageSizeTooLarge {
                    page_size: explicit,
                    max_page_size,
                });
            }
        }
        if max_page_size == 0 {
            return Err(CoreError::InvalidPageSize(0));
        }
        if let Some(limit) = max_records.bound() {
            if max_page_size > limit {
                return Err(CoreError::ContradictoryLimits {
                    max_page_size,
                    max_records: limit,
                });
            }
        }

        let page = match request.page {
            Some(page) => page,
            None => get_int(params, PAGE_PARAM, to_i64(self.config.default_page), strict)?,
        };

        let page_size = match request.page_size.and_then(|size| u64::try_from(size).ok()) {
            Some(explicit) => explicit,
            None => self.derived_page_size(params, max_page_size)?,
        };

        let page = match (u64::try_from(page), max_records.bound()) {
            (Ok(requested), Some(limit)) if requested.saturating_mul(page_size) > limit => {
                let capped = limit / page_size;
                tracing::debug!(
                    requested,
                    page = capped,
                    page_size,
                    max_records = limit,
                    "Requested page exceeds record cap, redirecting"
                );
                capped
            }
            (Ok(requested), _) => requested,
            (Err(_), _) => 0,
        };

        Ok(ResolvedPage {
            page: page.max(1),
            page_size,
        })
    }

    fn derived_page_size<P: ParamSource + ?Sized>(
        &self,
        params: &P,
        max_page_size: u64,
    ) -> Result<u64, CoreError> {
        let default = self.config.default_page_size.max(1);
        let raw = get_int(
            params,
            PAGE_SIZE_PARAM,
            to_i64(default),
            self.config.raise_on_value_error,
        )?;

        let size = match u64::try_from(raw) {
            Ok(size) if size >= 1 => size,
            _ => {
                tracing::debug!(page_size = raw, default, "Non-positive page size, using default");
                default
            }
        };

        if size > max_page_size {
            tracing::debug!(page_size = size, max_page_size, "Clamping page size");
            Ok(max_page_size)
        } else {
            Ok(size)
        }
    }

    /// Resolve the request and cut the matching window out of `collection`.
    pub fn paginate<C, P>(
        &self,
        collection: C,
        request: &PageRequest,
        params: &P,
    ) -> Result<Page<C::Item>, CoreError>
    where
        C: Collection,
        P: ParamSource + ?Sized,
    {
        let resolved = self.resolve(request, params)?;
        let pagination = window(collection.count(), resolved.page, resolved.page_size);
        let items = collection.slice(pagination.offset(), pagination.len());

        Ok(Page { items, pagination })
    }
}

/// Compute the window for `page` of size `page_size` over `total` items.
///
/// Pages past the end land on the last page; an empty collection has a
/// single empty page. `page` and `page_size` below 1 are treated as 1.
pub fn window(total: u64, page: u64, page_size: u64) -> PaginationDescriptor {
    let page_size = page_size.max(1);
    let last_page = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, last_page);

    let offset = (page - 1) * page_size;
    let len = page_size.min(total.saturating_sub(offset));
    let (from, to) = if len == 0 {
        (0, 0)
    } else {
        (offset + 1, offset + len)
    };

    PaginationDescriptor {
        total,
        page,
        page_size,
        last_page,
        from,
        to,
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
