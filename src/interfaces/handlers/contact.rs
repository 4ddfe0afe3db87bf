use actix_web::{post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{contact::ContactForm, envelope::ApiResponse},
    errors::AppError,
    use_cases::contact::submit_contact,
};

#[post("/contact")]
#[instrument(skip(form))]
pub async fn create_contact(form: web::Json<ContactForm>) -> Result<impl Responder, AppError> {
    let response = submit_contact(form.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(response.message)))
}
