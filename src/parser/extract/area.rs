use crate::parser::patterns::AREA_RE;
use crate::parser::Transcript;

use super::rooms::leading_count;

/// Square feet from the first `<n> sq ft | square feet | sq.ft.` mention.
/// Other units are not converted.
pub fn extract(t: &Transcript) -> Option<u32> {
    leading_count(&AREA_RE, t.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(text: &str) -> Option<u32> {
        extract(&Transcript::new(text))
    }

    #[test]
    fn unit_spellings() {
        assert_eq!(area("900 sq ft"), Some(900));
        assert_eq!(area("900sqft"), Some(900));
        assert_eq!(area("1200 Square Feet"), Some(1200));
        assert_eq!(area("1200 squarefeet"), Some(1200));
        assert_eq!(area("750 sq.ft."), Some(750));
        assert_eq!(area("750 SQ.FT"), Some(750));
    }

    #[test]
    fn other_units_ignored() {
        assert_eq!(area("1000 square meters"), None);
        assert_eq!(area("80 m2"), None);
    }

    #[test]
    fn oversized_area_is_kept() {
        assert_eq!(area("5000000000 sq ft"), Some(u32::MAX));
    }

    #[test]
    fn first_mention_wins() {
        assert_eq!(area("900 sq ft inside, 300 sq ft patio"), Some(900));
    }
}
