use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use tracing::instrument;

use crate::{constants::START_TIME, entities::envelope::ApiResponse, AppState};

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: String,
    message: String,
    timestamp: String,
    environment: String,
    version: String,
    uptime: String,
    database: String,
}

#[get("/health")]
#[instrument(skip(state))]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);
    let human_uptime =
        format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = state.profile_handler.database_status().await;

    HttpResponse::Ok().json(ApiResponse::ok(HealthStatus {
        status: "OK".to_string(),
        message: "🚀 Portfolio Backend API is running!".to_string(),
        timestamp: now.to_rfc3339(),
        environment: state.env.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: human_uptime.to_string(),
        database: database.to_string(),
    }))
}
