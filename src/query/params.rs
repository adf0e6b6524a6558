//! Query parameter parsing
//!
//! Integers are read with leading-integer semantics: optional leading
//! whitespace and sign, then decimal digits, ignoring whatever follows.
//! Unparsable values fall back to the defaults; parsed values are not
//! clamped.

/// Page used when `page` is absent or unparsable
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `limit` is absent or unparsable
pub const DEFAULT_LIMIT: i64 = 10;

/// Parse the leading integer of `raw`. `None` if there is no digit or the
/// value overflows.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// A resolved listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    /// Free-text filter; `None` or empty means no filtering.
    pub filter: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            filter: None,
        }
    }
}

impl PageRequest {
    /// Resolve raw query-string values, substituting defaults.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, filter: Option<&str>) -> Self {
        Self {
            page: page.and_then(parse_int).unwrap_or(DEFAULT_PAGE),
            limit: limit.and_then(parse_int).unwrap_or(DEFAULT_LIMIT),
            filter: filter.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }
}
