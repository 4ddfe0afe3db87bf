use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        envelope::ApiResponse,
        project::{NewProject, UpdateProject},
    },
    errors::AppError,
    AppState,
};

#[get("/projects")]
#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(projects)))
}

#[get("/projects/{id}")]
#[instrument(skip(state))]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(project)))
}

#[post("/projects")]
#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let created = state
        .project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(created)))
}

#[put("/projects/{id}")]
#[instrument(skip(state, data))]
pub async fn update_project(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    data: web::Json<UpdateProject>,
) -> Result<impl Responder, AppError> {
    let updated = state
        .project_handler
        .update_project(id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated)))
}

#[delete("/projects/{id}")]
#[instrument(skip(state))]
pub async fn delete_project(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    state
        .project_handler
        .delete_project(id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Project deleted successfully")))
}
