use std::sync::LazyLock;

use regex::Regex;

// Compiled once per process. Digits are ASCII only so the residue always parses.

/// Matched against the lowercased transcript.
pub static PROPERTY_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"apartment|flat|condo|house|villa|townhouse").unwrap());

/// Matched against the case-preserving transcript.
pub static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$\s?[0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?|[0-9]+\s?(?:dollars|dollar|usd)")
        .unwrap()
});

/// Matched against the lowercased transcript.
pub static BEDROOMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s?(?:bedroom|bed|br|beds)").unwrap());

/// Matched against the lowercased transcript.
pub static BATHROOMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s?(?:bathroom|bath|ba|baths)").unwrap());

/// Matched against the case-preserving transcript.
pub static AREA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s?(?:sq\s?ft|square\s?feet|sq\.?ft\.?)").unwrap()
});
