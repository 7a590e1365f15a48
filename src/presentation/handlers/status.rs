use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::ServiceInfo;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl From<ServiceInfo> for StatusResponse {
    fn from(info: ServiceInfo) -> Self {
        Self {
            status: info.status,
            service: info.service,
            version: info.version,
            description: info.description,
        }
    }
}

pub async fn status_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusResponse::from(ServiceInfo::current())))
}
