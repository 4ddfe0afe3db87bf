mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, web};

use repositories::sqlx_repo::{SqlxProfileRepo, SqlxProjectRepo, SqlxSetupRepo};
use settings::AppEnvironment;
use use_cases::{profile::ProfileHandler, projects::ProjectHandler, setup::SetupHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub profile_handler: AppProfileHandler,
    pub setup_handler: AppSetupHandler,
    pub env: AppEnvironment,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppProfileHandler = ProfileHandler<SqlxProfileRepo>;
pub type AppSetupHandler = SetupHandler<SqlxSetupRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let project_handler = ProjectHandler::new(SqlxProjectRepo::new(pool.clone()));
        let profile_handler = ProfileHandler::new(SqlxProfileRepo::new(pool.clone()));
        let setup_handler = SetupHandler::new(SqlxSetupRepo::new(pool));

        AppState {
            project_handler,
            profile_handler,
            setup_handler,
            env: config.env.clone(),
        }
    }
}
