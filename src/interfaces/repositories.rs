pub mod profile;
pub mod project;
pub mod setup;
pub mod sqlx_repo;
