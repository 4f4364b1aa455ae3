use crate::parser::patterns::PROPERTY_TYPE_RE;
use crate::parser::Transcript;
use crate::record::PropertyType;

/// First vocabulary term in reading order, case-insensitive.
pub fn extract(t: &Transcript) -> Option<PropertyType> {
    let m = PROPERTY_TYPE_RE.find(&t.lower)?;
    PropertyType::from_term(m.as_str())
}
