use crate::parser::patterns::PRICE_RE;
use crate::parser::Transcript;

/// First currency amount (`$1,200.50`, `900 dollars`, `900 usd`) in the
/// case-preserving text. Malformed residue counts as no match.
pub fn extract(t: &Transcript) -> Option<f64> {
    let m = PRICE_RE.find(t.raw)?;
    parse_amount(m.as_str())
}

/// Keeps digits and dots, then parses. Rejects empty and non-finite results.
fn parse_amount(span: &str) -> Option<f64> {
    let residue: String = span
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    residue.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(text: &str) -> Option<f64> {
        extract(&Transcript::new(text))
    }

    #[test]
    fn dollar_sign() {
        assert_eq!(price("asking $250,000 firm"), Some(250_000.0));
        assert_eq!(price("$ 1200 a month"), Some(1200.0));
        assert_eq!(price("only $99.95"), Some(99.95));
        assert_eq!(price("$0"), Some(0.0));
    }

    #[test]
    fn word_suffix() {
        assert_eq!(price("1500 dollars"), Some(1500.0));
        assert_eq!(price("1500dollar"), Some(1500.0));
        assert_eq!(price("rent is 800 USD"), Some(800.0));
        assert_eq!(price("800 Dollars"), Some(800.0));
    }

    #[test]
    fn malformed_groups_stop_early() {
        // ",00" is not a thousands group, so only "$1" matches.
        assert_eq!(price("$1,00"), Some(1.0));
        // One decimal digit is not a fraction.
        assert_eq!(price("$5.5"), Some(5.0));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(price("was $300,000 now $280,000"), Some(300_000.0));
    }

    #[test]
    fn bare_numbers_are_not_prices() {
        assert_eq!(price("3 bed house 1500"), None);
        assert_eq!(price("1500 euros"), None);
        assert_eq!(price(""), None);
    }

    #[test]
    fn residue_parsing() {
        assert_eq!(parse_amount("$1,234.56"), Some(1234.56));
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount(&format!("${}", "9".repeat(400))), None);
    }
}
