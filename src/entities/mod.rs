//! Entity type definitions

pub mod material;
pub mod partner;
pub mod product;

pub use material::{Material, MaterialDraft, MaterialListRow, MaterialType};
pub use partner::Partner;
pub use product::{ProductListRow, ProductType, ProductUsage};

use thiserror::Error;

/// Client-side validation failure, raised before any store call is made
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: String },
}
