use actix_web::{get, HttpResponse, Responder};

use crate::{entities::envelope::ApiResponse, use_cases::content};

// Fixed in-memory content; no state, no failure modes.

#[get("/personal-info")]
pub async fn personal_info() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(content::personal_info()))
}

#[get("/site-config")]
pub async fn site_config() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(content::site_config()))
}

#[get("/experience")]
pub async fn experience() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(content::experience()))
}

#[get("/certificates")]
pub async fn certificates() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(content::certificates()))
}

#[get("/blog-posts")]
pub async fn blog_posts() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(content::blog_posts()))
}
