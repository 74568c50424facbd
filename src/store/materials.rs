//! Material queries and mutations

use sqlx::PgPool;

use super::error::{Result, StoreError};
use crate::entities::{Material, MaterialDraft, MaterialListRow, MaterialType};

pub(super) async fn list(pool: &PgPool) -> Result<Vec<MaterialListRow>> {
    tracing::debug!("listing materials");
    let rows = sqlx::query_as::<_, MaterialListRow>(
        r#"
        SELECT m.material_id, m.material_name, mt.type_name, m.unit_price,
               m.quantity_in_stock, m.min_quantity, m.unit_of_measure
        FROM materials m
        JOIN material_types mt ON m.material_type_id = mt.material_type_id
        ORDER BY m.material_id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(super) async fn get(pool: &PgPool, id: i32) -> Result<Material> {
    tracing::debug!(material_id = id, "fetching material");
    sqlx::query_as::<_, Material>(
        r#"
        SELECT material_id, material_name, material_type_id, unit_price,
               quantity_in_stock, min_quantity, package_quantity, unit_of_measure
        FROM materials
        WHERE material_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound {
        entity: "material",
        id,
    })
}

pub(super) async fn add(pool: &PgPool, draft: &MaterialDraft) -> Result<i32> {
    tracing::debug!(name = %draft.name, type_id = draft.type_id, "inserting material");
    let result = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO materials
            (material_name, material_type_id, unit_price, quantity_in_stock,
             min_quantity, package_quantity, unit_of_measure)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING material_id
        "#,
    )
    .bind(&draft.name)
    .bind(draft.type_id)
    .bind(draft.unit_price)
    .bind(draft.quantity_in_stock)
    .bind(draft.min_quantity)
    .bind(draft.package_quantity)
    .bind(&draft.unit_of_measure)
    .fetch_one(pool)
    .await;

    match result {
        Ok(id) => Ok(id),
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(StoreError::ForeignKey {
                message: format!("no material type with id {}", draft.type_id),
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub(super) async fn update(pool: &PgPool, id: i32, draft: &MaterialDraft) -> Result<()> {
    tracing::debug!(material_id = id, "updating material");
    let result = sqlx::query(
        r#"
        UPDATE materials
        SET material_name = $1, material_type_id = $2, unit_price = $3,
            quantity_in_stock = $4, min_quantity = $5, package_quantity = $6,
            unit_of_measure = $7
        WHERE material_id = $8
        "#,
    )
    .bind(&draft.name)
    .bind(draft.type_id)
    .bind(draft.unit_price)
    .bind(draft.quantity_in_stock)
    .bind(draft.min_quantity)
    .bind(draft.package_quantity)
    .bind(&draft.unit_of_measure)
    .bind(id)
    .execute(pool)
    .await;

    match result {
        Ok(done) if done.rows_affected() > 0 => Ok(()),
        Ok(_) => Err(StoreError::NotFound {
            entity: "material",
            id,
        }),
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(StoreError::ForeignKey {
                message: format!("no material type with id {}", draft.type_id),
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub(super) async fn delete(pool: &PgPool, id: i32) -> Result<()> {
    tracing::debug!(material_id = id, "deleting material");
    let result = sqlx::query("DELETE FROM materials WHERE material_id = $1")
        .bind(id)
        .execute(pool)
        .await;

    match result {
        Ok(done) if done.rows_affected() > 0 => Ok(()),
        Ok(_) => Err(StoreError::NotFound {
            entity: "material",
            id,
        }),
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(StoreError::Conflict {
                entity: "material",
                id,
                message: "it is still used by at least one product".to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub(super) async fn list_types(pool: &PgPool) -> Result<Vec<MaterialType>> {
    tracing::debug!("listing material types");
    let rows = sqlx::query_as::<_, MaterialType>(
        "SELECT material_type_id, type_name FROM material_types ORDER BY material_type_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
