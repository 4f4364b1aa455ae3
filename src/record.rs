use std::fmt;

use serde::{Deserialize, Serialize};

/// Property kinds recognized in a transcript. Rendered title-cased, exactly
/// as spoken: "flat" stays `Flat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Flat,
    Condo,
    House,
    Villa,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        Self::Apartment,
        Self::Flat,
        Self::Condo,
        Self::House,
        Self::Villa,
        Self::Townhouse,
    ];

    /// Lowercase vocabulary term as it appears in text.
    pub const fn term(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Flat => "flat",
            Self::Condo => "condo",
            Self::House => "house",
            Self::Villa => "villa",
            Self::Townhouse => "townhouse",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Flat => "Flat",
            Self::Condo => "Condo",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Townhouse => "Townhouse",
        }
    }

    pub fn from_term(term: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.term() == term)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amenity tags detected by keyword presence. Each tag is checked on its own;
/// add a variant plus its triggers to extend the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Furnished,
    Parking,
    Balcony,
}

impl Feature {
    /// Evaluation order, which is also the output order.
    pub const ALL: [Feature; 3] = [Self::Furnished, Self::Parking, Self::Balcony];

    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Furnished => &["furniture", "furnished"],
            Self::Parking => &["parking", "garage"],
            Self::Balcony => &["balcony", "terrace"],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Furnished => "Furnished",
            Self::Parking => "Parking",
            Self::Balcony => "Balcony",
        }
    }

    /// `lower` must already be lowercased.
    pub fn is_mentioned(self, lower: &str) -> bool {
        self.triggers().iter().any(|t| lower.contains(t))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required slots that can be reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingField {
    Type,
    Price,
}

impl MissingField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Price => "price",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    pub bedrooms: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bathrooms: Option<u32>,
    /// Square feet.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub area: Option<u32>,
    pub features: Vec<Feature>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub record: PropertyRecord,
    pub missing_fields: Vec<MissingField>,
}

impl ExtractionResult {
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }

    pub fn is_missing(&self, field: MissingField) -> bool {
        self.missing_fields.contains(&field)
    }
}
