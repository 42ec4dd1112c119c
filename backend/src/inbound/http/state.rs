//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and remain testable without real I/O.

use std::sync::Arc;

use crate::domain::WishService;

/// Dependency bundle for HTTP handlers.
///
/// The service (and through it the store) is owned here and injected into
/// the app; there is no ambient singleton.
#[derive(Clone)]
pub struct HttpState {
    /// Wish submission and retrieval service.
    pub wishes: Arc<WishService>,
}

impl HttpState {
    /// Construct state over a wish service.
    pub fn new(wishes: Arc<WishService>) -> Self {
        Self { wishes }
    }
}
