pub mod password;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl LoginOutcome {
    fn rejected() -> Self {
        Self {
            success: false,
            role: None,
        }
    }
}

/// Check a username/password pair. Unknown users and wrong passwords yield
/// the same rejected outcome.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    plain: &str,
) -> Result<LoginOutcome, AppError> {
    let Some(user) = db::users::find_by_username(pool, username).await? else {
        password::verify_unknown(plain).await?;
        tracing::debug!("Login rejected for unknown account");
        return Ok(LoginOutcome::rejected());
    };

    if !password::verify(plain, &user.password_hash).await? {
        tracing::debug!("Login rejected for {}", user.username);
        return Ok(LoginOutcome::rejected());
    }

    Ok(LoginOutcome {
        success: true,
        role: Some(user.role),
    })
}

/// Create the `admin` account with `default_password` if it is missing.
/// Returns whether the account was created by this call.
pub async fn bootstrap_admin(pool: &SqlitePool, default_password: &str) -> Result<bool, AppError> {
    if db::users::find_by_username(pool, db::users::DEFAULT_ADMIN)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let pw_hash = password::hash(default_password).await?;
    Ok(db::users::ensure_admin(pool, &pw_hash).await?)
}
