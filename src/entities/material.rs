//! Material entity types - raw inputs tracked in inventory

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// One row of the material list, with the type name joined in.
///
/// This is the seven-column shape the list view renders; the full row
/// (including `package_quantity`) is [`Material`].
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct MaterialListRow {
    pub material_id: i32,
    pub material_name: String,

    /// Display name of the material's type, joined from `material_types`
    pub type_name: String,

    pub unit_price: Decimal,
    pub quantity_in_stock: i32,
    pub min_quantity: i32,
    pub unit_of_measure: String,
}

/// A complete material row as stored
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Material {
    pub material_id: i32,
    pub material_name: String,

    /// Foreign key into `material_types`
    pub material_type_id: i32,

    pub unit_price: Decimal,
    pub quantity_in_stock: i32,
    pub min_quantity: i32,

    /// How many units one package holds
    pub package_quantity: Decimal,

    pub unit_of_measure: String,
}

/// A material type row
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct MaterialType {
    pub material_type_id: i32,
    pub type_name: String,
}

/// The fields of a material as entered by the operator, before they reach
/// the store. Used for both insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub name: String,
    pub type_id: i32,
    pub unit_price: Decimal,
    pub quantity_in_stock: i32,
    pub min_quantity: i32,
    pub package_quantity: Decimal,
    pub unit_of_measure: String,
}

impl MaterialDraft {
    /// Check the draft against the client-side rules: name and unit must be
    /// non-empty, every numeric field must be non-negative.
    ///
    /// The type reference is not checked here; the store's foreign key is
    /// authoritative for that.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if self.unit_of_measure.trim().is_empty() {
            return Err(ValidationError::Empty { field: "unit of measure" });
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "unit price",
                value: self.unit_price.to_string(),
            });
        }
        if self.quantity_in_stock < 0 {
            return Err(ValidationError::Negative {
                field: "quantity in stock",
                value: self.quantity_in_stock.to_string(),
            });
        }
        if self.min_quantity < 0 {
            return Err(ValidationError::Negative {
                field: "minimum quantity",
                value: self.min_quantity.to_string(),
            });
        }
        if self.package_quantity < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "package quantity",
                value: self.package_quantity.to_string(),
            });
        }
        Ok(())
    }
}

impl From<&Material> for MaterialDraft {
    fn from(material: &Material) -> Self {
        Self {
            name: material.material_name.clone(),
            type_id: material.material_type_id,
            unit_price: material.unit_price,
            quantity_in_stock: material.quantity_in_stock,
            min_quantity: material.min_quantity,
            package_quantity: material.package_quantity,
            unit_of_measure: material.unit_of_measure.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn draft() -> MaterialDraft {
        MaterialDraft {
            name: "Oak Plank".to_string(),
            type_id: 1,
            unit_price: Decimal::from_str("12.50").unwrap(),
            quantity_in_stock: 100,
            min_quantity: 10,
            package_quantity: Decimal::from_str("5.0").unwrap(),
            unit_of_measure: "pcs".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_zero_numerics_pass() {
        let mut d = draft();
        d.unit_price = Decimal::ZERO;
        d.quantity_in_stock = 0;
        d.min_quantity = 0;
        d.package_quantity = Decimal::ZERO;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(
            d.validate(),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn test_empty_unit_rejected() {
        let mut d = draft();
        d.unit_of_measure = String::new();
        assert_eq!(
            d.validate(),
            Err(ValidationError::Empty {
                field: "unit of measure"
            })
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut d = draft();
        d.unit_price = Decimal::from_str("-0.01").unwrap();
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "unit price must not be negative (got -0.01)");
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut d = draft();
        d.quantity_in_stock = -1;
        assert!(matches!(
            d.validate(),
            Err(ValidationError::Negative {
                field: "quantity in stock",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_min_quantity_rejected() {
        let mut d = draft();
        d.min_quantity = -5;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_negative_package_quantity_rejected() {
        let mut d = draft();
        d.package_quantity = Decimal::from_str("-2").unwrap();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_draft_from_material_round_trips_fields() {
        let material = Material {
            material_id: 7,
            material_name: "Birch Veneer".to_string(),
            material_type_id: 2,
            unit_price: Decimal::from_str("3.20").unwrap(),
            quantity_in_stock: 40,
            min_quantity: 8,
            package_quantity: Decimal::from_str("10").unwrap(),
            unit_of_measure: "m2".to_string(),
        };
        let d = MaterialDraft::from(&material);
        assert_eq!(d.name, "Birch Veneer");
        assert_eq!(d.type_id, 2);
        assert_eq!(d.quantity_in_stock, 40);
        assert_eq!(d.unit_of_measure, "m2");
    }
}
