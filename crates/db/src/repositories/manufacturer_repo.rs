//! Repository for the `manufacturers` table.

use automir_core::types::DbId;
use sqlx::PgPool;

use crate::models::manufacturer::{Manufacturer, ManufacturerInput};

/// Provides CRUD operations for manufacturers.
pub struct ManufacturerRepo;

impl ManufacturerRepo {
    /// Insert a new manufacturer, returning the generated id.
    pub async fn create(pool: &PgPool, input: &ManufacturerInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO manufacturers (name, country, year_founded)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.country)
        .bind(input.year_founded)
        .fetch_one(pool)
        .await
    }

    /// List all manufacturers ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Manufacturer>, sqlx::Error> {
        sqlx::query_as::<_, Manufacturer>(
            "SELECT id, name, country, year_founded FROM manufacturers ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Replace every field of a manufacturer. Returns `true` if a row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ManufacturerInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manufacturers SET name = $2, country = $3, year_founded = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.country)
        .bind(input.year_founded)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a manufacturer by id. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while models still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
