use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use validator::ValidationErrors;

use crate::entities::envelope::ApiResponse;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Validation error: {_0}")]
    ValidationError(String),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Database error: {_0}")]
    DatabaseError(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Clients get the descriptive message for their own mistakes only;
        // server-side failures are logged in full and returned generic.
        let message = match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(detail) => {
                tracing::error!("Database error: {}", detail);
                "Internal server error".to_string()
            }
            AppError::InternalError(detail) => {
                tracing::error!("Unhandled error: {}", detail);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ApiResponse::<()>::error(message))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::ValidationError(messages)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}
