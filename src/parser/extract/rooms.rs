use regex::Regex;

use crate::parser::patterns::{BATHROOMS_RE, BEDROOMS_RE};
use crate::parser::Transcript;

/// Leading count of the first `<n> bedroom|bed|br|beds` mention.
pub fn bedrooms(t: &Transcript) -> Option<u32> {
    leading_count(&BEDROOMS_RE, &t.lower)
}

/// Leading count of the first `<n> bathroom|bath|ba|baths` mention.
pub fn bathrooms(t: &Transcript) -> Option<u32> {
    leading_count(&BATHROOMS_RE, &t.lower)
}

/// Parses capture group 1 of the first match. The group is ASCII digits only,
/// so the one parse failure is overflow, which saturates at `u32::MAX`.
pub(crate) fn leading_count(re: &Regex, text: &str) -> Option<u32> {
    let digits = re.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u32::MAX))
}
