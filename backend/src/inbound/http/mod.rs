//! HTTP inbound adapter exposing the JSON endpoints.

pub mod error;
pub mod index;
pub mod state;
pub mod wishes;

pub use error::{ApiResult, ErrorBody};
