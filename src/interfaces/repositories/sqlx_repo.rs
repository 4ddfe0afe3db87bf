use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProfileRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSetupRepo {
    pub pool: PgPool,
}
