use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::{education::Education, skill::Skill, user::User},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn list_education(&self) -> Result<Vec<Education>, AppError>;
    async fn get_personal(&self) -> Result<Option<User>, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn list_education(&self) -> Result<Vec<Education>, AppError> {
        let education =
            sqlx::query_as::<_, Education>("SELECT * FROM education ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(education)
    }

    async fn get_personal(&self) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
