//! Pagination of list endpoints.
//!
//! Page and limit arrive as untrusted query strings. They are normalized the same way a
//! lenient numeric coercion would: the absolute value is used, and anything absent, empty,
//! non-numeric or zero falls back to the default. A limit of 0 means "no limit".

/// Page used when none, or an unusable one, is requested
pub const DEFAULT_PAGE_NUMBER: u64 = 1;
/// Limit used when none, or an unusable one, is requested; 0 returns every record
pub const DEFAULT_PAGE_LIMIT: u64 = 0;

/// Largest skip or limit a database query accepts, values above are clamped
pub const MAX_PAGINATION_VALUE: u64 = i64::MAX as u64;

/// Number of records to skip and the maximum number to return
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Records to skip before the first returned one
    pub skip: u64,
    /// 0 means unlimited
    pub limit: u64,
}

/// Converts raw `page` and `limit` query values into a [`Pagination`].
///
/// `skip` is `(page - 1) * limit`, so without a limit the page has no effect and `skip` is
/// always 0.
///
/// # Example
/// ```
/// use mission_control::server::util::pagination::{paginate, Pagination};
///
/// assert_eq!(paginate(Some("2"), Some("5")), Pagination { skip: 5, limit: 5 });
/// assert_eq!(paginate(Some("3"), None), Pagination { skip: 0, limit: 0 });
/// ```
pub fn paginate(raw_page: Option<&str>, raw_limit: Option<&str>) -> Pagination {
    let page = normalize(raw_page).unwrap_or(DEFAULT_PAGE_NUMBER);
    let limit = normalize(raw_limit).unwrap_or(DEFAULT_PAGE_LIMIT);

    Pagination {
        skip: (page - 1).saturating_mul(limit).min(MAX_PAGINATION_VALUE),
        limit,
    }
}

/// Absolute integer value of a raw query parameter, `None` when unusable or zero
fn normalize(raw: Option<&str>) -> Option<u64> {
    let value = raw?.trim().parse::<f64>().ok()?.abs();

    if !value.is_finite() {
        return None;
    }

    // Float to int casts saturate at u64::MAX
    let value = (value.trunc() as u64).min(MAX_PAGINATION_VALUE);

    (value != 0).then_some(value)
}
