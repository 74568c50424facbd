//! Product queries, including the bill-of-materials usage join

use sqlx::PgPool;

use super::error::Result;
use crate::entities::{ProductListRow, ProductType, ProductUsage};

pub(super) async fn list(pool: &PgPool) -> Result<Vec<ProductListRow>> {
    tracing::debug!("listing products");
    let rows = sqlx::query_as::<_, ProductListRow>(
        r#"
        SELECT p.product_id, p.product_name, pt.type_name, p.min_partner_price
        FROM products p
        JOIN product_types pt ON p.product_type_id = pt.product_type_id
        ORDER BY p.product_id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(super) async fn list_types(pool: &PgPool) -> Result<Vec<ProductType>> {
    tracing::debug!("listing product types");
    let rows = sqlx::query_as::<_, ProductType>(
        "SELECT product_type_id, type_name FROM product_types ORDER BY product_type_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(super) async fn using(pool: &PgPool, material_id: i32) -> Result<Vec<ProductUsage>> {
    tracing::debug!(material_id, "listing products using material");
    let rows = sqlx::query_as::<_, ProductUsage>(
        r#"
        SELECT p.product_name, mp.required_quantity
        FROM material_products mp
        JOIN products p ON mp.product_id = p.product_id
        WHERE mp.material_id = $1
        ORDER BY p.product_id
        "#,
    )
    .bind(material_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
