//! Interactive prompts - form fields, selection, confirmation
//!
//! Field prompts validate as the operator types: required text must be
//! non-empty, numerics must parse and be non-negative. A failed submit
//! re-opens the form with everything still filled in, so entered data is
//! never lost.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::entities::{MaterialDraft, MaterialType};

/// Prefill values for the material form. Fields left `None` start blank.
#[derive(Debug, Clone, Default)]
pub struct MaterialFormSeed {
    pub name: Option<String>,
    pub type_id: Option<i32>,
    pub unit_price: Option<Decimal>,
    pub quantity_in_stock: Option<i32>,
    pub min_quantity: Option<i32>,
    pub package_quantity: Option<Decimal>,
    pub unit_of_measure: Option<String>,
}

impl From<&MaterialDraft> for MaterialFormSeed {
    fn from(draft: &MaterialDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            type_id: Some(draft.type_id),
            unit_price: Some(draft.unit_price),
            quantity_in_stock: Some(draft.quantity_in_stock),
            min_quantity: Some(draft.min_quantity),
            package_quantity: Some(draft.package_quantity),
            unit_of_measure: Some(draft.unit_of_measure.clone()),
        }
    }
}

/// Run the full material form and return the entered draft
pub fn material_form(types: &[MaterialType], seed: &MaterialFormSeed) -> Result<MaterialDraft> {
    let name = input_required("Name", seed.name.as_deref())?;
    let type_id = select_material_type(types, seed.type_id)?;
    let unit_price = input_decimal("Unit price", seed.unit_price)?;
    let quantity_in_stock = input_count("Quantity in stock", seed.quantity_in_stock)?;
    let min_quantity = input_count("Minimum quantity", seed.min_quantity)?;
    let package_quantity = input_decimal("Package quantity", seed.package_quantity)?;
    let unit_of_measure = input_required("Unit of measure", seed.unit_of_measure.as_deref())?;

    Ok(MaterialDraft {
        name,
        type_id,
        unit_price,
        quantity_in_stock,
        min_quantity,
        package_quantity,
        unit_of_measure,
    })
}

/// Prompt for a required text value
pub fn input_required(prompt: &str, initial: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(initial) = initial.filter(|s| !s.is_empty()) {
        input = input.with_initial_text(initial.to_string());
    }
    input
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .into_diagnostic()
}

/// Prompt for a non-negative decimal value
pub fn input_decimal(prompt: &str, initial: Option<Decimal>) -> Result<Decimal> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial.to_string());
    }
    let raw = input
        .validate_with(|value: &String| match Decimal::from_str(value.trim()) {
            Ok(parsed) if parsed >= Decimal::ZERO => Ok(()),
            Ok(_) => Err("must not be negative"),
            Err(_) => Err("enter a number"),
        })
        .interact_text()
        .into_diagnostic()?;
    Decimal::from_str(raw.trim()).into_diagnostic()
}

/// Prompt for a non-negative whole number
pub fn input_count(prompt: &str, initial: Option<i32>) -> Result<i32> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial.to_string());
    }
    let raw = input
        .validate_with(|value: &String| match value.trim().parse::<i32>() {
            Ok(parsed) if parsed >= 0 => Ok(()),
            Ok(_) => Err("must not be negative"),
            Err(_) => Err("enter a whole number"),
        })
        .interact_text()
        .into_diagnostic()?;
    raw.trim().parse::<i32>().into_diagnostic()
}

/// Pick a material type from the freshly fetched list
pub fn select_material_type(types: &[MaterialType], current: Option<i32>) -> Result<i32> {
    let items: Vec<String> = types
        .iter()
        .map(|t| format!("{} ({})", t.type_name, t.material_type_id))
        .collect();
    let default = current
        .and_then(|id| types.iter().position(|t| t.material_type_id == id))
        .unwrap_or(0);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Material type")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    Ok(types[index].material_type_id)
}

/// Single-row selection over arbitrary items; returns the chosen index
pub fn select(prompt: &str, items: &[String]) -> Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .into_diagnostic()
}

/// Yes/no confirmation, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .into_diagnostic()
}
