//! Filesystem-backed storage for uploaded media.
//!
//! Uploaded files are written under the configured media root, in a
//! subdirectory per media kind, with generated names so client-supplied
//! filenames never reach the filesystem. The returned paths are relative to
//! the media root and are served by the static `/media` route.

use rand::Rng;
use std::path::PathBuf;

use crate::server::error::AppError;

/// Maximum accepted upload size. Enforced by the router's body limit on the
/// upload routes and checked again when reading multipart fields.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Kind of uploaded media, determining the subdirectory it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Avatar,
    ProjectImage,
    Badge,
}

impl MediaKind {
    pub fn dir(&self) -> &'static str {
        match self {
            MediaKind::Avatar => "avatars",
            MediaKind::ProjectImage => "projects",
            MediaKind::Badge => "badges",
        }
    }
}

/// Maps an upload's content type to the stored file extension.
///
/// Only raster image formats the browser can render inline are accepted.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[derive(Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the media root and one subdirectory per media kind.
    pub async fn init(&self) -> Result<(), AppError> {
        for kind in [MediaKind::Avatar, MediaKind::ProjectImage, MediaKind::Badge] {
            tokio::fs::create_dir_all(self.root.join(kind.dir())).await?;
        }
        Ok(())
    }

    /// Writes an uploaded image and returns its media-root-relative path.
    ///
    /// # Arguments
    /// - `kind` - Which subdirectory the file belongs in
    /// - `content_type` - Declared content type of the upload
    /// - `data` - Raw file bytes
    ///
    /// # Returns
    /// - `Ok(String)` - Relative path, e.g. `avatars/h7Rq...K2.png`
    /// - `Err(AppError::BadRequest)` - Unsupported content type or empty or
    ///   oversized payload
    /// - `Err(AppError::IoErr)` - Filesystem write failed
    pub async fn store(
        &self,
        kind: MediaKind,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, AppError> {
        let Some(extension) = extension_for(content_type) else {
            return Err(AppError::BadRequest(format!(
                "Unsupported image type '{}'; use png, jpeg, gif, or webp",
                content_type
            )));
        };

        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(
                "Uploaded file exceeds the 5 MiB limit".to_string(),
            ));
        }

        let filename = format!("{}.{}", Self::generate_file_stem(), extension);
        let relative = format!("{}/{}", kind.dir(), filename);

        let dir = self.root.join(kind.dir());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), data).await?;

        Ok(relative)
    }

    /// Generates a random 16-character alphanumeric file stem.
    fn generate_file_stem() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const STEM_LENGTH: usize = 16;

        let mut rng = rand::rng();

        (0..STEM_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_image_types() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/gif"), Some("gif"));
        assert_eq!(extension_for("image/webp"), Some("webp"));
    }

    #[test]
    fn rejects_unknown_content_types() {
        assert_eq!(extension_for("image/svg+xml"), None);
        assert_eq!(extension_for("application/pdf"), None);
        assert_eq!(extension_for("text/html"), None);
    }

    #[tokio::test]
    async fn stores_file_under_kind_directory() {
        let root = std::env::temp_dir().join(format!(
            "showcase-media-test-{}",
            MediaStorage::generate_file_stem()
        ));
        let storage = MediaStorage::new(&root);
        storage.init().await.unwrap();

        let path = storage
            .store(MediaKind::Avatar, "image/png", b"not-really-a-png")
            .await
            .unwrap();

        assert!(path.starts_with("avatars/"));
        assert!(path.ends_with(".png"));
        assert!(root.join(&path).exists());

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_oversized_payload() {
        let root = std::env::temp_dir().join(format!(
            "showcase-media-test-{}",
            MediaStorage::generate_file_stem()
        ));
        let storage = MediaStorage::new(&root);

        let oversized = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let result = storage
            .store(MediaKind::ProjectImage, "image/png", &oversized)
            .await;

        assert!(result.is_err());
    }
}
