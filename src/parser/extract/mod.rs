//! One pure extractor per slot. Each reads the shared [`Transcript`] and
//! returns `None` when its pattern does not match.
//!
//! [`Transcript`]: crate::parser::Transcript

pub mod area;
pub mod features;
pub mod price;
pub mod property_type;
pub mod rooms;
