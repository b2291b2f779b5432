//! Query parameter types for the listing endpoint.

/// Upper bound for `daysAhead`; day 0 plus a week.
pub const MAX_DAYS_AHEAD: u32 = 7;

/// Name of the query parameter read by `GET /`.
pub const DAYS_AHEAD_PARAM: &str = "daysAhead";

/// `?daysAhead=` on `GET /`.
///
/// Kept as a raw string so that anything the caller sends is accepted and
/// normalized instead of rejected.
#[derive(Debug, Default)]
pub struct ListingParams {
    pub days_ahead: Option<String>,
}

impl ListingParams {
    /// Pick the parameters out of decoded query pairs. When `daysAhead` is
    /// repeated the first occurrence wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            days_ahead: pairs
                .into_iter()
                .find(|(key, _)| key == DAYS_AHEAD_PARAM)
                .map(|(_, value)| value),
        }
    }

    /// Number of additional days to fetch, always in `0..=MAX_DAYS_AHEAD`.
    pub fn days_ahead(&self) -> u32 {
        self.days_ahead.as_deref().map_or(0, parse_days_ahead)
    }
}

/// Read a leading integer (optional sign, then digits) and clamp it into
/// `0..=MAX_DAYS_AHEAD`. Trailing characters are ignored; input without
/// leading digits counts as 0.
pub fn parse_days_ahead(raw: &str) -> u32 {
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
    if end == 0 || negative {
        return 0;
    }

    // Too many digits to fit is still "more than a week".
    digits[..end]
        .parse::<u32>()
        .map_or(MAX_DAYS_AHEAD, |n| n.min(MAX_DAYS_AHEAD))
}
