use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{ExtractionResult, Feature, MissingField, PropertyType};

const MAX_TITLE: usize = 100;
const MAX_DESCRIPTION: usize = 2000;
const MAX_ADDRESS: usize = 200;

/// Property types the listing store accepts. Narrower than what the engine
/// recognizes: `Flat`, `Villa` and `Townhouse` are rejected here.
pub const ACCEPTED_PROPERTY_TYPES: &[&str] = &["House", "Apartment", "Condo", "Land", "Commercial"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
    Withdrawn,
}

impl std::str::FromStr for ListingStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Pending" => Ok(Self::Pending),
            "Sold" => Ok(Self::Sold),
            "Withdrawn" => Ok(Self::Withdrawn),
            other => Err(ListingError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    #[error("required fields missing: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{0} must be a non-negative number")]
    Negative(&'static str),

    #[error("invalid property type: {0}")]
    InvalidPropertyType(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

/// Form state held by the caller between dictation and submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub property_type: Option<PropertyType>,
    pub price: Option<f64>,
    pub bedrooms: u32,
    pub bathrooms: Option<u32>,
    pub area: Option<u32>,
    pub features: Vec<Feature>,
    pub description: String,
    pub missing_fields: Vec<MissingField>,
}

impl ListingForm {
    /// Overlays an extraction onto the form. Unset slots keep whatever the
    /// user already entered; bedrooms, features and description always win.
    pub fn apply(&mut self, result: &ExtractionResult) {
        let r = &result.record;
        if r.property_type.is_some() {
            self.property_type = r.property_type;
        }
        if r.price.is_some() {
            self.price = r.price;
        }
        if r.bathrooms.is_some() {
            self.bathrooms = r.bathrooms;
        }
        if r.area.is_some() {
            self.area = r.area;
        }
        self.bedrooms = r.bedrooms;
        self.features = r.features.clone();
        self.description = r.description.clone();
        self.missing_fields = result.missing_fields.clone();
    }

    /// Type and price are needed before moving on to photos.
    pub fn can_continue(&self) -> bool {
        self.property_type.is_some() && self.price.is_some()
    }

    pub fn is_missing(&self, field: MissingField) -> bool {
        self.missing_fields.contains(&field)
    }

    pub fn to_draft(&self, title: &str, address: &str, status: ListingStatus) -> ListingDraft {
        ListingDraft {
            title: title.to_string(),
            description: self.description.clone(),
            address: address.to_string(),
            price: self.price,
            property_type: self.property_type.map(|t| t.to_string()),
            bedrooms: self.bedrooms,
            area: self.area.map(f64::from),
            status,
        }
    }
}

/// Payload handed to the listing store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub price: Option<f64>,
    pub property_type: Option<String>,
    pub bedrooms: u32,
    pub area: Option<f64>,
    pub status: ListingStatus,
}

impl ListingDraft {
    /// Store-side checks, first failing rule wins.
    pub fn validate(&self) -> Result<(), ListingError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.property_type.as_deref().map_or(true, |t| t.trim().is_empty()) {
            missing.push("propertyType");
        }
        if self.area.is_none() {
            missing.push("area");
        }
        if !missing.is_empty() {
            return Err(ListingError::MissingRequired(missing));
        }

        for (field, value, max) in [
            ("title", &self.title, MAX_TITLE),
            ("description", &self.description, MAX_DESCRIPTION),
            ("address", &self.address, MAX_ADDRESS),
        ] {
            if value.trim().chars().count() > max {
                return Err(ListingError::TooLong { field, max });
            }
        }

        for (field, value) in [("price", self.price), ("area", self.area)] {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(ListingError::Negative(field));
            }
        }

        if let Some(t) = self.property_type.as_deref() {
            if !ACCEPTED_PROPERTY_TYPES.contains(&t) {
                return Err(ListingError::InvalidPropertyType(t.to_string()));
            }
        }

        Ok(())
    }
}
