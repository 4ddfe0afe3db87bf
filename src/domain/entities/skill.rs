use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only through the API; rows come from the seed routine.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub level: String,
    pub category: Option<String>,
    pub icon_url: Option<String>,
    pub experience: Option<String>,
    pub created_at: DateTime<Utc>,
}
