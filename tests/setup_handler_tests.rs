use mockall::{mock, Sequence};

use portfolio_api::errors::AppError;
use portfolio_api::repositories::setup::SetupRepository;
use portfolio_api::use_cases::setup::SetupHandler;

mock! {
    pub SetupRepo {}

    #[async_trait::async_trait]
    impl SetupRepository for SetupRepo {
        async fn create_tables(&self) -> Result<(), AppError>;
        async fn seed_initial_data(&self) -> Result<(), AppError>;
    }
}

#[tokio::test]
async fn bootstrap_runs_before_seeding() {
    let mut repo = MockSetupRepo::new();
    let mut seq = Sequence::new();

    repo.expect_create_tables()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));
    repo.expect_seed_initial_data()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    let handler = SetupHandler::new(repo);
    assert!(handler.setup_database().await.is_ok());
}

#[tokio::test]
async fn ddl_failure_skips_seeding() {
    let mut repo = MockSetupRepo::new();

    repo.expect_create_tables()
        .times(1)
        .returning(|| Err(AppError::DatabaseError("connection refused".into())));
    repo.expect_seed_initial_data().times(0);

    let handler = SetupHandler::new(repo);
    assert!(matches!(
        handler.setup_database().await,
        Err(AppError::DatabaseError(_))
    ));
}

#[tokio::test]
async fn seed_failure_surfaces_after_bootstrap() {
    let mut repo = MockSetupRepo::new();

    repo.expect_create_tables().times(1).returning(|| Ok(()));
    repo.expect_seed_initial_data()
        .times(1)
        .returning(|| Err(AppError::DatabaseError("duplicate key".into())));

    let handler = SetupHandler::new(repo);
    assert!(handler.setup_database().await.is_err());
}
