use sqlx::SqlitePool;

use crate::models::{Role, User, UserSummary};

pub const DEFAULT_ADMIN: &str = "admin";

pub async fn create<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    username: &str,
    password_hash: &str,
    role: Role,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT username, password, role FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn list_usernames_by_role(
    pool: &SqlitePool,
    role: Role,
) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        "SELECT username FROM users WHERE role = ? ORDER BY username",
    )
    .bind(role.as_str())
    .fetch_all(pool)
    .await
}

/// Insert the `admin` account unless one already exists. Returns whether a
/// row was written. Safe to call on every start and from concurrent callers.
pub async fn ensure_admin(pool: &SqlitePool, password_hash: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO users (username, password, role) VALUES (?, ?, ?)
         ON CONFLICT(username) DO NOTHING",
    )
    .bind(DEFAULT_ADMIN)
    .bind(password_hash)
    .bind(Role::Admin.as_str())
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn count_by_username(pool: &SqlitePool, username: &str) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
