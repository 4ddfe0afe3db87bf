use actix_web::{get, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::envelope::ApiResponse, errors::AppError, AppState};

#[get("/skills")]
#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.profile_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(skills)))
}

#[get("/education")]
#[instrument(skip(state))]
pub async fn list_education(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let education = state.profile_handler.list_education().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(education)))
}

#[get("/personal")]
#[instrument(skip(state))]
pub async fn get_personal(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let personal = state.profile_handler.get_personal().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(personal)))
}
