use actix_web::{web, HttpResponse, Responder};

use crate::{
    entities::envelope::ApiResponse,
    handlers::{contact, content, home, profile, projects, setup, system},
};

mod json_error;

/// Builds the fixed route table for one deployment mode. The setup route
/// only exists when `setup_enabled` is true (non-production); there is no
/// runtime branching inside a handler.
pub fn configure_routes(cfg: &mut web::ServiceConfig, setup_enabled: bool) {
    cfg.service(home::home);

    let api = web::scope("/api")
        .service(system::health_check)
        .service(content::personal_info)
        .service(content::site_config)
        .service(content::experience)
        .service(content::certificates)
        .service(content::blog_posts)
        .service(profile::list_skills)
        .service(profile::list_education)
        .service(profile::get_personal)
        .service(projects::list_projects)
        .service(projects::get_project)
        .service(projects::create_project)
        .service(projects::update_project)
        .service(projects::delete_project)
        .service(contact::create_contact);

    let api = if setup_enabled {
        api.service(setup::setup_database)
    } else {
        api
    };

    cfg.service(api);

    cfg.configure(json_error::config_routes);

    cfg.default_service(web::route().to(route_not_found));
}

async fn route_not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::<()>::error("Route not found"))
}
