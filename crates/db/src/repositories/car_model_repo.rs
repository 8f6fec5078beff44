//! Repository for the `models` table.

use automir_core::types::DbId;
use sqlx::PgPool;

use crate::models::car_model::{CarModel, CarModelInput};

/// Provides CRUD operations for car models.
pub struct CarModelRepo;

impl CarModelRepo {
    /// Insert a new model, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CarModelInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO models (name, manufacturer_id, year, body_type)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.manufacturer_id)
        .bind(input.year)
        .bind(&input.body_type)
        .fetch_one(pool)
        .await
    }

    /// List all models with their manufacturer name, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<CarModel>, sqlx::Error> {
        sqlx::query_as::<_, CarModel>(
            "SELECT m.id, m.name, man.name AS manufacturer, m.year, m.body_type,
                    m.manufacturer_id
             FROM models m
             JOIN manufacturers man ON m.manufacturer_id = man.id
             ORDER BY m.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Replace every field of a model. Returns `true` if a row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CarModelInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE models
             SET name = $2, manufacturer_id = $3, year = $4, body_type = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.manufacturer_id)
        .bind(input.year)
        .bind(&input.body_type)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a model by id. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while cars still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
