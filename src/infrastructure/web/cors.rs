use actix_cors::Cors;
use actix_web::http::header;

/// Allow-list CORS policy. Requests without an Origin header (same-origin
/// or non-browser callers) pass through untouched; listed origins are
/// accepted with credentials; everything else is rejected by the middleware
/// before any handler runs.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let origins = allowed_origins.to_vec();

    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origins
                .iter()
                .any(|allowed| origin.as_bytes() == allowed.as_bytes())
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}
