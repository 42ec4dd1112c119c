//! Filesystem photo store.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{PhotoStore, PhotoStoreError};

/// Photo store writing decoded bytes into a content directory.
///
/// Filenames embed a fresh UUID so they are collision-free across the
/// process lifetime. The returned path is the written path as a string;
/// with the default relative `uploads` directory it is relative to the
/// working directory.
pub struct FsPhotoStore {
    dir: PathBuf,
}

impl FsPhotoStore {
    /// Create a store rooted at the given content directory.
    ///
    /// The directory itself is created at startup, not here.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl PhotoStore for FsPhotoStore {
    async fn save(&self, bytes: &[u8]) -> Result<String, PhotoStoreError> {
        let filename = format!("wish-photo-{}.jpg", Uuid::new_v4());
        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn save_writes_bytes_under_a_fresh_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FsPhotoStore::new(dir.path().to_path_buf());

        actix_rt::System::new().block_on(async move {
            let first = store.save(b"abc").await.expect("first save");
            let second = store.save(b"def").await.expect("second save");
            assert_ne!(first, second);

            let written = tokio::fs::read(&first).await.expect("read back");
            assert_eq!(written, b"abc");
            assert!(first.contains("wish-photo-"));
            assert!(first.ends_with(".jpg"));
        });
    }

    #[rstest]
    fn save_surfaces_write_failures() {
        let store = FsPhotoStore::new(PathBuf::from("/definitely/not/a/dir"));

        actix_rt::System::new().block_on(async move {
            let err = store.save(b"abc").await.expect_err("write fails");
            assert!(matches!(err, PhotoStoreError::Io(_)));
        });
    }
}
