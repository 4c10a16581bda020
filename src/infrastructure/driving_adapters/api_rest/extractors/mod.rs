//! Request Extractors

pub mod validated_body;

pub use validated_body::{BodyLimits, ValidatedBody};
