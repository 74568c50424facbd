//! Partner entity type - external business entities, minimally modeled

use serde::Serialize;
use sqlx::FromRow;

/// A partner row
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Partner {
    pub partner_id: i32,
    pub company_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}
