//! Wish API handlers.
//!
//! ```text
//! GET  /submit-wish?name=ali&gender=f   List wishes, filtered
//! POST /submit-wish                     Submit a wish
//! ```
//!
//! Both responses return stored records in full, `user_photo_path`
//! included, and creation answers `201`; one contract, applied uniformly.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Wish, WishFilter, WishSubmission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Listing response for `GET /submit-wish`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WishListResponse {
    /// Human-readable summary.
    pub message: String,
    /// Number of records matching the filter.
    pub total: usize,
    /// Matching records, in insertion order.
    pub wishes: Vec<Wish>,
}

/// Creation response for `POST /submit-wish`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WishCreatedResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The stored record.
    pub wish: Wish,
}

/// List stored wishes, applying any filter criteria from the query string.
///
/// Reading has no side effects: repeated identical calls return identical
/// results absent intervening writes, and an empty result set is not an
/// error.
#[utoipa::path(
    get,
    path = "/submit-wish",
    params(WishFilter),
    responses(
        (status = 200, description = "Matching wishes", body = WishListResponse)
    ),
    tags = ["wishes"],
    operation_id = "listWishes"
)]
#[get("/submit-wish")]
pub async fn list_wishes(
    state: web::Data<HttpState>,
    query: web::Query<WishFilter>,
) -> ApiResult<HttpResponse> {
    let wishes = state.wishes.list(&query).await;
    Ok(HttpResponse::Ok().json(WishListResponse {
        message: "List of submitted wishes".to_owned(),
        total: wishes.len(),
        wishes,
    }))
}

/// Submit a wish.
///
/// `user_photo_path` in the body carries an optional base64 photo payload
/// (with or without a `data:image/<subtype>;base64,` prefix); the stored
/// record's field of the same name holds the persisted file path.
///
/// # Errors
///
/// - `400 Bad Request`: `Missing required fields`, `Invalid email format`,
///   or `Invalid phone number`.
/// - `500 Internal Server Error`: the photo payload failed to decode or
///   write; no record is stored.
#[utoipa::path(
    post,
    path = "/submit-wish",
    request_body = WishSubmission,
    responses(
        (status = 201, description = "Wish stored", body = WishCreatedResponse),
        (status = 400, description = "Validation failure", body = crate::inbound::http::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::inbound::http::ErrorBody)
    ),
    tags = ["wishes"],
    operation_id = "submitWish"
)]
#[post("/submit-wish")]
pub async fn submit_wish(
    state: web::Data<HttpState>,
    payload: web::Json<WishSubmission>,
) -> ApiResult<HttpResponse> {
    let wish = state.wishes.submit(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(WishCreatedResponse {
        message: "Wish submitted successfully!".to_owned(),
        wish,
    }))
}

#[cfg(test)]
#[path = "wishes_tests.rs"]
mod tests;
