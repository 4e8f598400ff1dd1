use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub number: String,
    pub location: String,
    pub profile: String,
    pub remarks: String,
    #[serde(serialize_with = "called_as_int", deserialize_with = "crate::extract::flag")]
    pub called: bool,
    pub called_by: String,
    pub called_at: String,
    pub assigned_to: String,
}

/// A validated spreadsheet row ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub number: String,
    pub location: String,
    pub profile: String,
    pub assigned_to: String,
}

/// The four fields overwritten when a call outcome is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub remarks: String,
    pub called: bool,
    pub called_by: String,
    pub called_at: String,
}

// Stored as INTEGER 0/1 and returned to clients the same way.
fn called_as_int<S: Serializer>(called: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*called))
}
