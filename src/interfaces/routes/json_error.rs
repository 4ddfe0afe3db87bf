use actix_web::{
    error::JsonPayloadError,
    http::StatusCode,
    web, HttpResponse, ResponseError,
};

use crate::entities::envelope::ApiResponse;

/// Rewrites body deserialization failures (malformed JSON, missing required
/// fields) into the standard envelope instead of actix's plain-text default.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ApiResponse::<()>::error(self.message.clone()))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        JsonError {
            message: format!("Invalid request body: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}
