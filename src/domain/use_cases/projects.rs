use validator::Validate;

use crate::{
    entities::project::{NewProject, Project, UpdateProject},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// All projects, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn get_project(&self, id: i32) -> Result<Project, AppError> {
        self.project_repo
            .get_project_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        self.project_repo.create_project(&request).await
    }

    /// Coalesce-merge update: fields absent from the patch keep their
    /// stored values. 404 when the id matches no row.
    pub async fn update_project(
        &self,
        id: i32,
        patch: UpdateProject,
    ) -> Result<Project, AppError> {
        patch.validate()?;

        self.project_repo
            .update_project(id, &patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn delete_project(&self, id: i32) -> Result<(), AppError> {
        self.project_repo
            .delete_project(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
                _ => e,
            })
    }
}
