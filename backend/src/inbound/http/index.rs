//! Service info endpoint.
//!
//! `GET /` doubles as the liveness probe: a `200` means the process is
//! serving requests.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service info response listing the available endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// Service banner.
    pub message: String,
    /// Available endpoints.
    pub endpoints: Vec<String>,
}

/// Liveness and endpoint discovery.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is alive", body = ServiceInfo)
    ),
    tags = ["info"],
    operation_id = "serviceInfo"
)]
#[get("/")]
pub async fn service_info() -> web::Json<ServiceInfo> {
    web::Json(ServiceInfo {
        message: "Wish submission service".to_owned(),
        endpoints: vec![
            "GET /".to_owned(),
            "GET /submit-wish".to_owned(),
            "POST /submit-wish".to_owned(),
        ],
    })
}
