use sqlx::SqlitePool;

use crate::models::{Candidate, NewCandidate, Outcome, Viewer};

const COLUMNS: &str =
    "id, name, number, location, profile, remarks, called, called_by, called_at, assigned_to";

pub async fn insert<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    candidate: &NewCandidate,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO candidates
            (name, number, location, profile, remarks, called, called_by, called_at, assigned_to)
         VALUES (?, ?, ?, ?, '', 0, '', '', ?)",
    )
    .bind(&candidate.name)
    .bind(&candidate.number)
    .bind(&candidate.location)
    .bind(&candidate.profile)
    .bind(&candidate.assigned_to)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Candidates assigned to `username` plus every unassigned one.
pub async fn list_by_assignee(
    pool: &SqlitePool,
    username: &str,
) -> Result<Vec<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(&format!(
        "SELECT {COLUMNS} FROM candidates
         WHERE assigned_to = ? OR assigned_to = ''
         ORDER BY id"
    ))
    .bind(username)
    .fetch_all(pool)
    .await
}

pub async fn list_visible_to(
    pool: &SqlitePool,
    viewer: &Viewer,
) -> Result<Vec<Candidate>, sqlx::Error> {
    match viewer {
        Viewer::Admin => list_all(pool).await,
        Viewer::Telecaller(username) => list_by_assignee(pool, username).await,
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrite the outcome fields. Returns the number of rows touched, which is
/// zero when `id` does not exist.
pub async fn update_outcome(
    pool: &SqlitePool,
    id: i64,
    outcome: &Outcome,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE candidates SET remarks = ?, called = ?, called_by = ?, called_at = ?
         WHERE id = ?",
    )
    .bind(&outcome.remarks)
    .bind(outcome.called)
    .bind(&outcome.called_by)
    .bind(&outcome.called_at)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
