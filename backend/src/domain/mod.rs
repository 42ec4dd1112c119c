//! Domain types and logic for wish submissions.
//!
//! Purpose: define the wish record, the pure submission validator, the
//! filter predicate, and the service orchestrating insert and scan, all
//! free of transport and storage details. Adapters plug in through the
//! traits in [`ports`].

pub mod error;
pub mod ports;
pub mod wish;
pub mod wish_service;

pub use self::error::{Error, ErrorCode};
pub use self::wish::{ValidWish, Wish, WishFilter, WishSubmission, WishValidationError};
pub use self::wish_service::WishService;

/// Convenient result alias for operations surfacing domain errors.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_request("Missing required fields"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
