use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, web};

use crate::routes::service_error_response;
use crate::services::ServiceError;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Key every protected request must present. An empty key locks the scope.
#[derive(Clone, Debug)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn accepts(&self, candidate: Option<&str>) -> bool {
        !self.0.is_empty() && candidate == Some(self.0.as_str())
    }
}

/// Rejects requests whose `X-Api-Key` header is missing or wrong with a 401
/// problem response.
pub async fn require_api_key(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let authorized = match req.app_data::<web::Data<ApiKey>>() {
        Some(api_key) => api_key.accepts(
            req.headers()
                .get(API_KEY_HEADER)
                .and_then(|value| value.to_str().ok()),
        ),
        None => {
            log::error!("API key middleware is mounted without a configured key");
            false
        }
    };

    if !authorized {
        log::warn!("Rejected request to {} without a valid API key", req.path());
        let response = service_error_response(ServiceError::Unauthorized);
        return Ok(req.into_response(response));
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}
