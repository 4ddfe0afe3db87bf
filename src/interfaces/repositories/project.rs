use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::project::{NewProject, Project, UpdateProject},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProject,
    ) -> Result<Option<Project>, AppError>;
    async fn delete_project(&self, id: i32) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, image_url, tech_stack, github_url, live_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.image_url.as_deref())
        .bind(project.tech_stack.as_deref())
        .bind(project.github_url.as_deref())
        .bind(project.live_url.as_deref())
        .bind(project.status_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProject,
    ) -> Result<Option<Project>, AppError> {
        // COALESCE keeps the stored value for every field the patch omits.
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                image_url = COALESCE($3, image_url),
                tech_stack = COALESCE($4, tech_stack),
                github_url = COALESCE($5, github_url),
                live_url = COALESCE($6, live_url),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.image_url.as_deref())
        .bind(patch.tech_stack.as_deref())
        .bind(patch.github_url.as_deref())
        .bind(patch.live_url.as_deref())
        .bind(patch.status.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_project(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
