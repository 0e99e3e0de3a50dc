//! User CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::User;

/// Create a user, or update the profile fields of an existing one.
///
/// `created_at` is kept from the first insert. An empty `created_at` on a
/// new user is filled with the current time.
pub async fn upsert_user(pool: &SqlitePool, user: &User) -> Result<User> {
    sqlx::query(
        r#"
        INSERT INTO users (id, name, age, weight, height, health_conditions, created_at)
        VALUES (?, ?, ?, ?, ?, ?, COALESCE(NULLIF(?, ''), strftime('%Y-%m-%dT%H:%M:%SZ', 'now')))
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            age = excluded.age,
            weight = excluded.weight,
            height = excluded.height,
            health_conditions = excluded.health_conditions
        "#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(user.age)
    .bind(user.weight)
    .bind(user.height)
    .bind(&user.health_conditions)
    .bind(&user.created_at)
    .execute(pool)
    .await?;

    tracing::info!(user_id = %user.id, "Saved user");

    get_user(pool, &user.id).await
}

/// Get a user by ID.
pub async fn get_user(pool: &SqlitePool, id: &str) -> Result<User> {
    find_user(pool, id).await?.ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}

/// Get a user by ID, if present.
pub async fn find_user(pool: &SqlitePool, id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, age, weight, height, health_conditions, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Delete a user by ID.
///
/// The user's goals and weekly plan are removed with it.
pub async fn delete_user(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "User",
            id: id.to_string(),
        });
    }

    tracing::info!(user_id = %id, "Deleted user");
    Ok(())
}

/// List all users, newest first.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, age, weight, height, health_conditions, created_at
        FROM users
        ORDER BY created_at DESC, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
