//! In-memory wish store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::WishRepository;
use crate::domain::wish::{Wish, WishFilter};

/// Append-only in-memory store of wish records.
///
/// Records live for the process lifetime; there is no delete operation. The
/// mutex serialises appends so insertion order and id uniqueness hold under
/// actix-web's multi-threaded runtime, and scans see consistent snapshots.
#[derive(Default)]
pub struct InMemoryWishRepository {
    wishes: Mutex<Vec<Wish>>,
}

impl InMemoryWishRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Wish>> {
        // A poisoned lock only means another handler panicked while holding
        // it; `Vec::push` cannot leave the data half-written.
        self.wishes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WishRepository for InMemoryWishRepository {
    async fn append(&self, wish: Wish) {
        self.guard().push(wish);
    }

    async fn scan(&self, filter: &WishFilter) -> Vec<Wish> {
        self.guard()
            .iter()
            .filter(|wish| filter.matches(wish))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    fn wish(name: &str) -> Wish {
        Wish {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: "a@b.co".to_owned(),
            phone_number: "5551234567".to_owned(),
            input_text: "hello".to_owned(),
            gender: None,
            temp_image_path: None,
            user_photo_path: None,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn scan_preserves_insertion_order() {
        let repo = InMemoryWishRepository::new();

        actix_rt::System::new().block_on(async move {
            let first = wish("Alice");
            let second = wish("Bob");
            repo.append(first.clone()).await;
            repo.append(second.clone()).await;

            let all = repo.scan(&WishFilter::default()).await;
            assert_eq!(all, vec![first, second]);
        });
    }

    #[rstest]
    fn scan_applies_filter_and_tolerates_no_matches() {
        let repo = InMemoryWishRepository::new();

        actix_rt::System::new().block_on(async move {
            repo.append(wish("Alice")).await;

            let filter = WishFilter {
                name: Some("zz".to_owned()),
                ..WishFilter::default()
            };
            assert!(repo.scan(&filter).await.is_empty());
        });
    }
}
