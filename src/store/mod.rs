//! Store module - the data-access layer over PostgreSQL
//!
//! A [`Store`] owns the process-wide database handle: a pool capped at one
//! connection plus a current-thread runtime. Every operation blocks the
//! calling thread for the duration of its round-trip; there is exactly one
//! user action in flight at a time, so nothing else contends for the
//! connection. Each statement commits individually - there is no
//! multi-statement transaction grouping anywhere in this layer.

pub mod error;
mod materials;
mod partners;
mod products;

pub use error::{Result, StoreError};

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::config::StoreConfig;
use crate::entities::{
    Material, MaterialDraft, MaterialListRow, MaterialType, Partner, ProductListRow, ProductType,
    ProductUsage,
};

/// Connection acquisition timeout; a store that cannot be reached within
/// this window reports a connection error rather than hanging the interface.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Owned handle to the relational store
pub struct Store {
    pool: PgPool,
    rt: Runtime,
}

impl Store {
    /// Open the long-lived connection described by `config`.
    ///
    /// Connecting eagerly establishes (and validates) the single pooled
    /// connection, so an unreachable or misconfigured store fails here, at
    /// the start of the user action, not in the middle of it.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user);
        if let Some(ref password) = config.password {
            options = options.password(password);
        }

        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            user = %config.user,
            "connecting to store"
        );

        let pool = rt
            .block_on(
                PgPoolOptions::new()
                    .max_connections(1)
                    .acquire_timeout(CONNECT_TIMEOUT)
                    .connect_with(options),
            )
            .map_err(|source| StoreError::Connection {
                host: config.host.clone(),
                port: config.port,
                source,
            })?;

        Ok(Self { pool, rt })
    }

    /// List all materials with their type names, ordered by identifier
    pub fn list_materials(&self) -> Result<Vec<MaterialListRow>> {
        self.rt.block_on(materials::list(&self.pool))
    }

    /// Fetch one material by identifier
    pub fn get_material(&self, id: i32) -> Result<Material> {
        self.rt.block_on(materials::get(&self.pool, id))
    }

    /// Insert a new material and return its generated identifier.
    ///
    /// The draft is expected to be validated already; an unknown type
    /// reference still surfaces as [`StoreError::ForeignKey`] via the
    /// store's constraint.
    pub fn add_material(&self, draft: &MaterialDraft) -> Result<i32> {
        self.rt.block_on(materials::add(&self.pool, draft))
    }

    /// Update an existing material. A missing identifier is reported as
    /// [`StoreError::NotFound`], never as a silent no-op.
    pub fn update_material(&self, id: i32, draft: &MaterialDraft) -> Result<()> {
        self.rt.block_on(materials::update(&self.pool, id, draft))
    }

    /// Delete a material. A delete blocked by bill-of-materials references
    /// is reported as [`StoreError::Conflict`] - store-enforced, not
    /// pre-checked.
    pub fn delete_material(&self, id: i32) -> Result<()> {
        self.rt.block_on(materials::delete(&self.pool, id))
    }

    /// List all material types, ordered by identifier
    pub fn list_material_types(&self) -> Result<Vec<MaterialType>> {
        self.rt.block_on(materials::list_types(&self.pool))
    }

    /// List all products with their type names, ordered by identifier
    pub fn list_products(&self) -> Result<Vec<ProductListRow>> {
        self.rt.block_on(products::list(&self.pool))
    }

    /// List all product types, ordered by identifier
    pub fn list_product_types(&self) -> Result<Vec<ProductType>> {
        self.rt.block_on(products::list_types(&self.pool))
    }

    /// List all partners, ordered by identifier
    pub fn list_partners(&self) -> Result<Vec<Partner>> {
        self.rt.block_on(partners::list(&self.pool))
    }

    /// List the products that consume the given material, with the quantity
    /// each one requires. A material used nowhere yields an empty list, not
    /// an error.
    pub fn products_using(&self, material_id: i32) -> Result<Vec<ProductUsage>> {
        self.rt.block_on(products::using(&self.pool, material_id))
    }
}
