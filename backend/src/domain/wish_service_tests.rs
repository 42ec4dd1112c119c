//! Tests for the wish service orchestration.

use super::*;
use crate::domain::error::ErrorCode;
use crate::domain::ports::PhotoStoreError;
use async_trait::async_trait;
use rstest::rstest;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingRepository {
    wishes: Mutex<Vec<Wish>>,
}

#[async_trait]
impl WishRepository for RecordingRepository {
    async fn append(&self, wish: Wish) {
        self.wishes.lock().expect("store poisoned").push(wish);
    }

    async fn scan(&self, filter: &WishFilter) -> Vec<Wish> {
        self.wishes
            .lock()
            .expect("store poisoned")
            .iter()
            .filter(|wish| filter.matches(wish))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct RecordingPhotoStore {
    saved: Mutex<Vec<Vec<u8>>>,
}

#[async_trait]
impl PhotoStore for RecordingPhotoStore {
    async fn save(&self, bytes: &[u8]) -> Result<String, PhotoStoreError> {
        let mut saved = self.saved.lock().expect("photo store poisoned");
        saved.push(bytes.to_vec());
        Ok(format!("uploads/wish-photo-{}.jpg", saved.len()))
    }
}

struct FailingPhotoStore;

#[async_trait]
impl PhotoStore for FailingPhotoStore {
    async fn save(&self, _bytes: &[u8]) -> Result<String, PhotoStoreError> {
        Err(PhotoStoreError::Io(std::io::Error::other("disk full")))
    }
}

fn submission() -> WishSubmission {
    WishSubmission {
        name: Some("Alice".to_owned()),
        email: Some("alice@example.com".to_owned()),
        phone_number: Some("5551234567".to_owned()),
        input_text: Some("world peace".to_owned()),
        ..WishSubmission::default()
    }
}

fn service_with(
    photos: Arc<dyn PhotoStore>,
) -> (WishService, Arc<RecordingRepository>) {
    let repo = Arc::new(RecordingRepository::default());
    (WishService::new(repo.clone(), photos), repo)
}

#[rstest]
#[case::bare_payload("aGVsbG8=", "aGVsbG8=")]
#[case::png_prefix("data:image/png;base64,aGVsbG8=", "aGVsbG8=")]
#[case::jpeg_prefix("data:image/jpeg;base64,xyz", "xyz")]
#[case::marker_mid_payload("abcdata:image/png;base64,xyz", "abcdata:image/png;base64,xyz")]
fn data_url_prefix_is_stripped(#[case] payload: &str, #[case] expected: &str) {
    assert_eq!(strip_data_url_prefix(payload), expected);
}

#[rstest]
fn submission_without_photo_stores_record_with_null_path() {
    let photos = Arc::new(RecordingPhotoStore::default());
    let (service, repo) = service_with(photos.clone());

    actix_rt::System::new().block_on(async move {
        let wish = service.submit(submission()).await.expect("submit succeeds");
        assert_eq!(wish.user_photo_path, None);
        assert!(photos.saved.lock().expect("photo store poisoned").is_empty());

        let stored = repo.scan(&WishFilter::default()).await;
        assert_eq!(stored, vec![wish]);
    });
}

#[rstest]
fn photo_payload_is_decoded_and_persisted() {
    let photos = Arc::new(RecordingPhotoStore::default());
    let (service, _repo) = service_with(photos.clone());

    actix_rt::System::new().block_on(async move {
        let mut candidate = submission();
        candidate.user_photo_path = Some("data:image/png;base64,aGVsbG8=".to_owned());

        let wish = service.submit(candidate).await.expect("submit succeeds");
        assert_eq!(
            wish.user_photo_path.as_deref(),
            Some("uploads/wish-photo-1.jpg")
        );
        let saved = photos.saved.lock().expect("photo store poisoned");
        assert_eq!(saved.as_slice(), &[b"hello".to_vec()]);
    });
}

#[rstest]
fn malformed_base64_aborts_the_submission() {
    let (service, repo) = service_with(Arc::new(RecordingPhotoStore::default()));

    actix_rt::System::new().block_on(async move {
        let mut candidate = submission();
        candidate.user_photo_path = Some("data:image/png;base64,@@not-base64@@".to_owned());

        let err = service.submit(candidate).await.expect_err("decode fails");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.details().is_some());
        assert!(repo.scan(&WishFilter::default()).await.is_empty());
    });
}

#[rstest]
fn write_failure_aborts_the_submission() {
    let (service, repo) = service_with(Arc::new(FailingPhotoStore));

    actix_rt::System::new().block_on(async move {
        let mut candidate = submission();
        candidate.user_photo_path = Some("aGVsbG8=".to_owned());

        let err = service.submit(candidate).await.expect_err("write fails");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(repo.scan(&WishFilter::default()).await.is_empty());
    });
}

#[rstest]
fn validation_failure_maps_to_invalid_request() {
    let (service, repo) = service_with(Arc::new(RecordingPhotoStore::default()));

    actix_rt::System::new().block_on(async move {
        let mut candidate = submission();
        candidate.email = Some("not-an-email".to_owned());

        let err = service.submit(candidate).await.expect_err("validation fails");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Invalid email format");
        assert!(repo.scan(&WishFilter::default()).await.is_empty());
    });
}

#[rstest]
fn submissions_get_distinct_ids_and_keep_order() {
    let (service, _repo) = service_with(Arc::new(RecordingPhotoStore::default()));

    actix_rt::System::new().block_on(async move {
        let first = service.submit(submission()).await.expect("first submit");
        let mut second_submission = submission();
        second_submission.name = Some("Bob".to_owned());
        let second = service
            .submit(second_submission)
            .await
            .expect("second submit");

        assert_ne!(first.id, second.id);

        let listed = service.list(&WishFilter::default()).await;
        assert_eq!(listed, vec![first, second]);
    });
}

#[rstest]
fn list_applies_the_filter() {
    let (service, _repo) = service_with(Arc::new(RecordingPhotoStore::default()));

    actix_rt::System::new().block_on(async move {
        let _alice = service.submit(submission()).await.expect("alice submits");
        let mut bob = submission();
        bob.name = Some("Bob".to_owned());
        let _bob = service.submit(bob).await.expect("bob submits");

        let filter = WishFilter {
            name: Some("ali".to_owned()),
            ..WishFilter::default()
        };
        let matches = service.list(&filter).await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.first().map(|wish| wish.name.as_str()), Some("Alice"));
    });
}
