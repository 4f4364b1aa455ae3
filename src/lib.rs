//! Turns a dictated property description into a structured listing record.
//!
//! [`extract`] is pure and stateless; call it from any thread.

pub mod batch;
pub mod listing;
pub mod parser;
pub mod record;

pub use parser::extract;
pub use record::{ExtractionResult, Feature, MissingField, PropertyRecord, PropertyType};
