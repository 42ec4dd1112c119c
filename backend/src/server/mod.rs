//! Server construction and middleware wiring.

mod config;

pub use config::{DEFAULT_PORT, DEFAULT_UPLOADS_DIR, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::index::service_info;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::wishes::{list_wishes, submit_wish};
use crate::middleware::Trace;

/// Request body size limit (JSON and URL-encoded payloads): 10 MiB, sized
/// for base64 photo payloads.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Assemble the application: state, payload limits, tracing middleware,
/// and routes. Swagger UI is mounted at `/docs` in debug builds only.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), expect(unused_mut, reason = "mutated in debug builds only"))]
    let mut app = App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().limit(BODY_LIMIT_BYTES))
        .app_data(web::FormConfig::default().limit(BODY_LIMIT_BYTES))
        .wrap(Trace)
        .service(service_info)
        .service(list_wishes)
        .service(submit_wish);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Bind the server on `0.0.0.0` at the configured port and return it
/// without awaiting.
///
/// # Errors
///
/// Returns an [`std::io::Error`] when the address cannot be bound.
pub fn run(config: &ServerConfig, state: web::Data<HttpState>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(("0.0.0.0", config.port()))?
        .run();
    Ok(server)
}
