use crate::{
    entities::{education::Education, skill::Skill, user::User},
    errors::AppError,
    repositories::profile::ProfileRepository,
};

/// Read side of the database-backed portfolio data: skills, education,
/// and the owner row behind the personal endpoint.
pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    /// All skills, alphabetical.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.profile_repo.list_skills().await
    }

    /// All education entries, newest first.
    pub async fn list_education(&self) -> Result<Vec<Education>, AppError> {
        self.profile_repo.list_education().await
    }

    /// The single seeded owner row.
    pub async fn get_personal(&self) -> Result<Option<User>, AppError> {
        self.profile_repo.get_personal().await
    }

    /// "OK" / "Unavailable" for the health endpoint.
    pub async fn database_status(&self) -> &'static str {
        match self.profile_repo.check_connection().await {
            Ok(()) => "OK",
            Err(_) => "Unavailable",
        }
    }
}
