use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::middleware::from_fn;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::api_key::{API_KEY_HEADER, require_api_key};
use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod movies;

/// RFC 7807 style error body.
#[derive(Debug, Serialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'static str,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

/// Build a JSON problem response for `status`.
pub fn problem(status: StatusCode, detail: impl Into<String>) -> HttpResponse {
    let detail = detail.into();
    let body = Problem {
        kind: "about:blank",
        title: status.canonical_reason().unwrap_or("Error"),
        status: status.as_u16(),
        detail: (!detail.is_empty()).then_some(detail),
    };
    HttpResponse::build(status)
        .content_type("application/problem+json")
        .json(body)
}

/// Translate a service outcome into the matching problem response.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => problem(StatusCode::NOT_FOUND, ""),
        ServiceError::BadRequest(message) => problem(StatusCode::BAD_REQUEST, message),
        ServiceError::Unauthorized => problem(
            StatusCode::UNAUTHORIZED,
            format!("missing or invalid {API_KEY_HEADER} header"),
        ),
        ServiceError::Internal => problem(StatusCode::INTERNAL_SERVER_ERROR, ""),
    }
}

/// Run blocking repository work on actix's thread pool.
pub async fn run_blocking<F, T>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.unwrap_or_else(|e| {
        log::error!("Blocking task failed: {e}");
        Err(ServiceError::Internal)
    })
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let response = problem(StatusCode::BAD_REQUEST, err.to_string());
    InternalError::from_response(err, response).into()
}

/// Register extractor settings and every API scope.
///
/// Expects `web::Data<DieselRepository>`, `web::Data<Arc<dyn ExchangeRateService>>`
/// and `web::Data<ApiKey>` to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
        .service(
            web::scope("/api/categories")
                .wrap(from_fn(require_api_key))
                .service(categories::list_categories)
                .service(categories::show_category)
                .service(categories::add_category)
                .service(categories::update_category)
                .service(categories::delete_category),
        )
        .service(
            web::scope("/api/movies")
                .service(movies::list_movies)
                .service(movies::show_movie)
                .service(movies::add_movie)
                .service(movies::update_movie)
                .service(movies::delete_movie),
        );
}
