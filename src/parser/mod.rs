pub mod extract;
pub mod patterns;

use tracing::debug;

use crate::record::{ExtractionResult, MissingField, PropertyRecord};

/// Bedrooms assumed when the transcript never mentions a count.
pub const DEFAULT_BEDROOMS: u32 = 1;

/// Read-only view of one transcript shared by every extractor.
pub struct Transcript<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl<'a> Transcript<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }
}

/// Single pass: transcript → per-slot matches → record + unresolved required slots.
pub fn extract(text: &str) -> ExtractionResult {
    let transcript = Transcript::new(text);

    let property_type = extract::property_type::extract(&transcript);
    let price = extract::price::extract(&transcript);
    let bedrooms = extract::rooms::bedrooms(&transcript).unwrap_or(DEFAULT_BEDROOMS);
    let bathrooms = extract::rooms::bathrooms(&transcript);
    let area = extract::area::extract(&transcript);
    let features = extract::features::extract(&transcript);

    let mut missing_fields = Vec::new();
    if property_type.is_none() {
        missing_fields.push(MissingField::Type);
    }
    if price.is_none() {
        missing_fields.push(MissingField::Price);
    }
    if !missing_fields.is_empty() {
        debug!(?missing_fields, "unresolved required slots");
    }

    ExtractionResult {
        record: PropertyRecord {
            property_type,
            price,
            bedrooms,
            bathrooms,
            area,
            features,
            description: text.to_string(),
        },
        missing_fields,
    }
}

// ── Tests ──
