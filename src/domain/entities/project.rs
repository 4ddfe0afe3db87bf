use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PROJECT_STATUS: &str = "completed";

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,

    #[serde(default)]
    pub github_url: Option<String>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

impl NewProject {
    /// The stored status: the supplied value, or "completed" when omitted.
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_PROJECT_STATUS)
    }
}

/// Partial update payload. Omitted fields keep their stored values
/// (coalesce-merge); there is no way to null a field out through a patch.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    #[serde(default)]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,

    #[serde(default)]
    pub github_url: Option<String>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_completed_when_omitted() {
        let payload: NewProject = serde_json::from_value(serde_json::json!({
            "title": "Portfolio API",
            "description": "Backend for my portfolio site"
        }))
        .unwrap();

        assert_eq!(payload.status_or_default(), "completed");
    }

    #[test]
    fn supplied_status_is_kept() {
        let payload: NewProject = serde_json::from_value(serde_json::json!({
            "title": "Portfolio API",
            "description": "Backend for my portfolio site",
            "status": "on-progress"
        }))
        .unwrap();

        assert_eq!(payload.status_or_default(), "on-progress");
    }

    #[test]
    fn empty_title_fails_validation() {
        let payload = NewProject {
            title: "".into(),
            description: "something".into(),
            image_url: None,
            tech_stack: None,
            github_url: None,
            live_url: None,
            status: None,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn empty_patch_deserializes_to_all_unset() {
        let patch: UpdateProject = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.status.is_none());
        assert!(patch.validate().is_ok());
    }
}
