//! Product entity types - manufactured goods composed of materials

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the product list, with the type name joined in
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProductListRow {
    pub product_id: i32,
    pub product_name: String,

    /// Display name of the product's type, joined from `product_types`
    pub type_name: String,

    pub min_partner_price: Decimal,
}

/// A product type row
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProductType {
    pub product_type_id: i32,
    pub type_name: String,
}

/// One bill-of-materials entry: a product that consumes some material, and
/// how much of it one unit of the product requires
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProductUsage {
    pub product_name: String,
    pub required_quantity: Decimal,
}
