use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The site owner. Written once by the seed routine, read back by the
/// personal endpoint; never updated or deleted through the API.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
