use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only through the API; rows come from the seed routine.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Education {
    pub id: i32,
    pub institution: String,
    pub major: Option<String>,
    pub degree: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
