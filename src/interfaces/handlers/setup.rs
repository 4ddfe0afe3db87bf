use actix_web::{post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::envelope::ApiResponse, errors::AppError, AppState};

/// Bootstrap + seed. Only routed outside production; see
/// `routes::configure_routes`.
#[post("/setup-database")]
#[instrument(skip(state))]
pub async fn setup_database(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    state.setup_handler.setup_database().await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message("Database setup completed successfully!")))
}
