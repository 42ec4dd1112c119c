//! Wish submission and retrieval service.
//!
//! Orchestrates the insert path (validate, decode the optional photo, write
//! it, append the record) and the filtered scan. The record is appended only
//! after every fallible step has succeeded, so no partial state is possible.

use std::sync::Arc;
use std::sync::OnceLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use regex::Regex;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::ports::{PhotoStore, WishRepository};
use crate::domain::wish::{ValidWish, Wish, WishFilter, WishSubmission};

static DATA_URL_RE: OnceLock<Regex> = OnceLock::new();

fn data_url_regex() -> &'static Regex {
    DATA_URL_RE.get_or_init(|| {
        let pattern = r"^data:image/\w+;base64,";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("data-URL regex failed to compile: {error}"))
    })
}

/// Strip an optional `data:image/<subtype>;base64,` marker from a photo
/// payload, leaving bare base64 text.
fn strip_data_url_prefix(payload: &str) -> &str {
    match data_url_regex().find(payload) {
        Some(marker) => payload.get(marker.end()..).unwrap_or_default(),
        None => payload,
    }
}

/// Service owning the wish store and photo persistence.
#[derive(Clone)]
pub struct WishService {
    wishes: Arc<dyn WishRepository>,
    photos: Arc<dyn PhotoStore>,
}

impl WishService {
    /// Construct a service over the given store and photo adapters.
    pub fn new(wishes: Arc<dyn WishRepository>, photos: Arc<dyn PhotoStore>) -> Self {
        Self { wishes, photos }
    }

    /// Validate a submission, persist its photo if present, and append the
    /// completed record to the store.
    ///
    /// # Errors
    ///
    /// - [`Error::invalid_request`] with the canonical validation message
    ///   when a required field is missing or the email or phone shape is
    ///   wrong.
    /// - [`Error::internal`] when the photo payload fails to decode or the
    ///   file write fails; the record is not appended.
    pub async fn submit(&self, submission: WishSubmission) -> Result<Wish, Error> {
        let valid =
            ValidWish::try_from(submission).map_err(|err| Error::invalid_request(err.to_string()))?;

        let user_photo_path = match valid.photo_payload.as_deref() {
            Some(payload) => Some(self.store_photo(payload).await?),
            None => None,
        };

        let wish = Wish {
            id: Uuid::new_v4(),
            name: valid.name,
            email: valid.email,
            phone_number: valid.phone_number,
            input_text: valid.input_text,
            gender: valid.gender,
            temp_image_path: valid.temp_image_path,
            user_photo_path,
            created_at: Utc::now(),
        };

        self.wishes.append(wish.clone()).await;
        info!(id = %wish.id, "wish stored");
        Ok(wish)
    }

    /// Return all stored wishes satisfying the filter, in insertion order.
    pub async fn list(&self, filter: &WishFilter) -> Vec<Wish> {
        self.wishes.scan(filter).await
    }

    /// Decode the payload and write it to the content directory, returning
    /// the stored path. Both decode and write failures are storage
    /// failures: the submission is aborted and nothing is appended.
    async fn store_photo(&self, payload: &str) -> Result<String, Error> {
        let bytes = BASE64
            .decode(strip_data_url_prefix(payload))
            .map_err(|err| storage_failure(format!("invalid photo payload: {err}")))?;

        self.photos
            .save(&bytes)
            .await
            .map_err(|err| storage_failure(err.to_string()))
    }
}

fn storage_failure(detail: String) -> Error {
    Error::internal("Submission failed").with_details(Value::String(detail))
}

#[cfg(test)]
#[path = "wish_service_tests.rs"]
mod tests;
