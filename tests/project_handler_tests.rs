use chrono::Utc;
use mockall::{mock, predicate::eq, Sequence};

use portfolio_api::entities::project::{NewProject, Project, UpdateProject};
use portfolio_api::errors::AppError;
use portfolio_api::repositories::project::ProjectRepository;
use portfolio_api::use_cases::projects::ProjectHandler;

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError>;
        async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
        async fn update_project(&self, id: i32, patch: &UpdateProject) -> Result<Option<Project>, AppError>;
        async fn delete_project(&self, id: i32) -> Result<(), AppError>;
    }
}

fn stored_project(id: i32, status: &str) -> Project {
    let now = Utc::now();
    Project {
        id,
        title: "Website Barbershop CutsProject".into(),
        description: "Website modern untuk barbershop dengan sistem booking online.".into(),
        image_url: None,
        tech_stack: Some(vec!["Vue.js".into(), "PostgreSQL".into()]),
        github_url: None,
        live_url: None,
        status: status.into(),
        created_at: now,
        updated_at: now,
    }
}

fn new_project(title: &str, description: &str, status: Option<&str>) -> NewProject {
    NewProject {
        title: title.into(),
        description: description.into(),
        image_url: None,
        tech_stack: None,
        github_url: None,
        live_url: None,
        status: status.map(Into::into),
    }
}

#[tokio::test]
async fn create_rejects_empty_title_without_touching_the_repo() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().times(0);

    let handler = ProjectHandler::new(repo);
    let result = handler
        .create_project(new_project("", "Some description", None))
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_rejects_empty_description() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().times(0);

    let handler = ProjectHandler::new(repo);
    let result = handler.create_project(new_project("Title", "", None)).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_defaults_status_to_completed() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .withf(|p| p.status_or_default() == "completed")
        .times(1)
        .returning(|_| Ok(stored_project(1, "completed")));

    let handler = ProjectHandler::new(repo);
    let created = handler
        .create_project(new_project("Title", "Description", None))
        .await
        .unwrap();

    assert_eq!(created.status, "completed");
}

#[tokio::test]
async fn create_keeps_a_supplied_status() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .withf(|p| p.status_or_default() == "on-progress")
        .times(1)
        .returning(|_| Ok(stored_project(1, "on-progress")));

    let handler = ProjectHandler::new(repo);
    let created = handler
        .create_project(new_project("Title", "Description", Some("on-progress")))
        .await
        .unwrap();

    assert_eq!(created.status, "on-progress");
}

#[tokio::test]
async fn get_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id()
        .with(eq(99))
        .returning(|_| Ok(None));

    let handler = ProjectHandler::new(repo);
    let err = handler.get_project(99).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "Project not found"));
}

#[tokio::test]
async fn get_existing_project_returns_the_row() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id()
        .with(eq(7))
        .returning(|_| Ok(Some(stored_project(7, "completed"))));

    let handler = ProjectHandler::new(repo);
    let project = handler.get_project(7).await.unwrap();

    assert_eq!(project.id, 7);
}

#[tokio::test]
async fn update_passes_the_patch_through_unchanged() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .withf(|id, patch| {
            *id == 3
                && patch.title.as_deref() == Some("New title")
                && patch.description.is_none()
                && patch.status.is_none()
        })
        .times(1)
        .returning(|id, _| Ok(Some(stored_project(id, "completed"))));

    let handler = ProjectHandler::new(repo);
    let patch = UpdateProject {
        title: Some("New title".into()),
        ..Default::default()
    };

    let updated = handler.update_project(3, patch).await.unwrap();
    assert_eq!(updated.id, 3);
}

#[tokio::test]
async fn update_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project().returning(|_, _| Ok(None));

    let handler = ProjectHandler::new(repo);
    let err = handler
        .update_project(42, UpdateProject::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn update_rejects_empty_title_in_patch() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project().times(0);

    let handler = ProjectHandler::new(repo);
    let patch = UpdateProject {
        title: Some("".into()),
        ..Default::default()
    };

    assert!(matches!(
        handler.update_project(3, patch).await,
        Err(AppError::ValidationError(_))
    ));
}

#[tokio::test]
async fn delete_twice_is_not_found_the_second_time() {
    let mut repo = MockProjectRepo::new();
    let mut seq = Sequence::new();

    repo.expect_delete_project()
        .with(eq(5))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    repo.expect_delete_project()
        .with(eq(5))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);

    assert!(handler.delete_project(5).await.is_ok());
    assert!(matches!(
        handler.delete_project(5).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn list_returns_whatever_the_repo_yields() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .returning(|| Ok(vec![stored_project(2, "completed"), stored_project(1, "on-progress")]));

    let handler = ProjectHandler::new(repo);
    let projects = handler.list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, 2);
}
