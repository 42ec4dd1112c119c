//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the info/listing endpoint and the wish submission and
//! retrieval endpoints, plus their request and response schemas. The
//! generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wish submission service API",
        description = "HTTP interface for submitting wishes and listing them with field filters."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::service_info,
        crate::inbound::http::wishes::list_wishes,
        crate::inbound::http::wishes::submit_wish,
    ),
    components(schemas(
        crate::domain::Wish,
        crate::domain::WishSubmission,
        crate::inbound::http::index::ServiceInfo,
        crate::inbound::http::wishes::WishListResponse,
        crate::inbound::http::wishes::WishCreatedResponse,
        crate::inbound::http::ErrorBody,
    ))
)]
pub struct ApiDoc;
