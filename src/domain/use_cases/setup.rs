use crate::{errors::AppError, repositories::setup::SetupRepository};

pub struct SetupHandler<R>
where
    R: SetupRepository,
{
    pub setup_repo: R,
}

impl<R> SetupHandler<R>
where
    R: SetupRepository,
{
    pub fn new(setup_repo: R) -> Self {
        SetupHandler { setup_repo }
    }

    /// Bootstrap then seed, in that order. Neither step runs in a
    /// transaction: a mid-sequence failure leaves earlier statements
    /// applied, and re-running duplicates the non-user seed rows.
    pub async fn setup_database(&self) -> Result<(), AppError> {
        self.setup_repo.create_tables().await?;
        self.setup_repo.seed_initial_data().await?;
        Ok(())
    }
}
