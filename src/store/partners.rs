//! Partner queries

use sqlx::PgPool;

use super::error::Result;
use crate::entities::Partner;

pub(super) async fn list(pool: &PgPool) -> Result<Vec<Partner>> {
    tracing::debug!("listing partners");
    let rows = sqlx::query_as::<_, Partner>(
        "SELECT partner_id, company_name, phone, email FROM partners ORDER BY partner_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
