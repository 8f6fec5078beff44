//! Repository for the `cars` table.

use automir_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{Car, CarDetails, CarInput};

/// Provides CRUD operations for cars plus the export lookup.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CarInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO cars
                (model_id, color, price, year, engine_type, transmission, mileage, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(input.model_id)
        .bind(&input.color)
        .bind(input.price)
        .bind(input.year)
        .bind(&input.engine_type)
        .bind(&input.transmission)
        .bind(input.mileage)
        .bind(&input.status)
        .fetch_one(pool)
        .await
    }

    /// List all cars with manufacturer and model names, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT c.id, man.name AS manufacturer, m.name AS model, c.color,
                    c.price::float8 AS price, c.year, c.engine_type, c.transmission,
                    c.mileage, c.status, c.model_id
             FROM cars c
             JOIN models m ON c.model_id = m.id
             JOIN manufacturers man ON m.manufacturer_id = man.id
             ORDER BY c.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Fetch one car joined with its model and manufacturer for document export.
    pub async fn find_details(pool: &PgPool, id: DbId) -> Result<Option<CarDetails>, sqlx::Error> {
        sqlx::query_as::<_, CarDetails>(
            "SELECT c.id, man.name AS manufacturer_name, man.country AS manufacturer_country,
                    m.name AS model_name, c.color, c.price::float8 AS price, c.year,
                    c.engine_type, c.transmission, c.mileage, c.status
             FROM cars c
             JOIN models m ON c.model_id = m.id
             JOIN manufacturers man ON m.manufacturer_id = man.id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Replace every field of a car. Returns `true` if a row matched.
    pub async fn update(pool: &PgPool, id: DbId, input: &CarInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars
             SET model_id = $2, color = $3, price = $4, year = $5, engine_type = $6,
                 transmission = $7, mileage = $8, status = $9
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.model_id)
        .bind(&input.color)
        .bind(input.price)
        .bind(input.year)
        .bind(&input.engine_type)
        .bind(&input.transmission)
        .bind(input.mileage)
        .bind(&input.status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a car by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
