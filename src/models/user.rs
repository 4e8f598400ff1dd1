use serde::{Deserialize, Serialize};

use super::Candidate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[sqlx(rename = "password")]
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
}

/// Row shape returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Telecaller,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Telecaller => "telecaller",
        }
    }
}

/// Who is asking for candidates, as claimed by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Admin,
    Telecaller(String),
}

impl Viewer {
    /// Any role other than `admin` is treated as a telecaller. A missing
    /// username matches nothing but the unassigned sentinel.
    pub fn from_query(user: Option<&str>, role: Option<&str>) -> Self {
        match role {
            Some(r) if r == Role::Admin.as_str() => Viewer::Admin,
            _ => Viewer::Telecaller(user.unwrap_or_default().to_string()),
        }
    }

    pub fn can_see(&self, candidate: &Candidate) -> bool {
        match self {
            Viewer::Admin => true,
            Viewer::Telecaller(username) => {
                candidate.assigned_to.is_empty() || candidate.assigned_to == *username
            }
        }
    }
}
