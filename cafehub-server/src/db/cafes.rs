//! Cafe table operations

use sqlx::SqlitePool;

use crate::models::{Cafe, CafeCreate};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Cafe>, sqlx::Error> {
    let cafes: Vec<Cafe> = sqlx::query_as(
        r#"
        SELECT id, name, map_url, img_url, location, seats,
               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
        FROM cafes
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

/// One row chosen uniformly at random; `None` on an empty table
pub async fn random(pool: &SqlitePool) -> Result<Option<Cafe>, sqlx::Error> {
    let cafe: Option<Cafe> = sqlx::query_as(
        r#"
        SELECT id, name, map_url, img_url, location, seats,
               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
        FROM cafes
        ORDER BY RANDOM()
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Cafe>, sqlx::Error> {
    let cafe: Option<Cafe> = sqlx::query_as(
        r#"
        SELECT id, name, map_url, img_url, location, seats,
               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
        FROM cafes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// Insert a cafe and return the stored row. A duplicate name surfaces as a
/// unique-constraint database error.
pub async fn insert(pool: &SqlitePool, cafe: &CafeCreate) -> Result<Cafe, sqlx::Error> {
    let stored: Cafe = sqlx::query_as(
        r#"
        INSERT INTO cafes (
            name, map_url, img_url, location, seats,
            has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, name, map_url, img_url, location, seats,
                  has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
        "#,
    )
    .bind(&cafe.name)
    .bind(&cafe.map_url)
    .bind(&cafe.img_url)
    .bind(&cafe.location)
    .bind(&cafe.seats)
    .bind(cafe.has_toilet)
    .bind(cafe.has_wifi)
    .bind(cafe.has_sockets)
    .bind(cafe.can_take_calls)
    .bind(&cafe.coffee_price)
    .fetch_one(pool)
    .await?;
    Ok(stored)
}

/// Update only `coffee_price`. Returns false when the id is unknown.
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE cafes SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete by id. Returns false when the id is unknown.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cafes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
