/**
 * Image Storage
 *
 * Writes uploaded images into the upload directory. Files are named
 * `<unix-millis>.<ext>`, keeping a sanitized extension from the client's
 * file name. The directory is served read-only under `/uploads`.
 */

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Longest extension kept from the uploaded file name
const MAX_EXTENSION_LEN: usize = 8;

/// Local-disk image store
#[derive(Debug, Clone)]
pub struct DiskImageStore {
    dir: PathBuf,
}

impl DiskImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if needed
    pub async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Save `bytes` and return the stored file name
    ///
    /// Never overwrites: on a name clash the timestamp is bumped.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> io::Result<String> {
        let extension = original_name.and_then(sanitized_extension);
        let mut stamp = Utc::now().timestamp_millis();

        loop {
            let file_name = match &extension {
                Some(ext) => format!("{stamp}.{ext}"),
                None => stamp.to_string(),
            };

            let opened = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.dir.join(&file_name))
                .await;

            match opened {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    return Ok(file_name);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => stamp += 1,
                Err(e) => return Err(e),
            }
        }
    }

    /// Delete a stored image; a missing file is not an error
    pub async fn remove(&self, file_name: &str) -> io::Result<()> {
        match fs::remove_file(self.dir.join(file_name)).await {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

fn sanitized_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?;

    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_extension() {
        assert_eq!(sanitized_extension("cat.PNG").as_deref(), Some("png"));
        assert_eq!(sanitized_extension("photo.jpeg").as_deref(), Some("jpeg"));
        assert_eq!(sanitized_extension("noext"), None);
        assert_eq!(sanitized_extension("weird.p/g"), None);
        assert_eq!(sanitized_extension("x.verylongextension"), None);
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskImageStore::new(dir.path());

        let name = store.save(Some("cat.png"), b"image-bytes").await.unwrap();
        assert!(name.ends_with(".png"));

        let written = std::fs::read(dir.path().join(&name)).unwrap();
        assert_eq!(written, b"image-bytes");
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskImageStore::new(dir.path());

        let first = store.save(Some("a.png"), b"one").await.unwrap();
        let second = store.save(Some("b.png"), b"two").await.unwrap();
        assert_ne!(first, second);

        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"one");
        assert_eq!(std::fs::read(dir.path().join(&second)).unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskImageStore::new(dir.path());

        let name = store.save(Some("cat.png"), b"x").await.unwrap();
        store.remove(&name).await.unwrap();
        assert!(!dir.path().join(&name).exists());

        store.remove(&name).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskImageStore::new(dir.path().join("missing"));
        assert!(store.save(Some("a.png"), b"x").await.is_err());

        store.ensure_dir().await.unwrap();
        assert!(store.save(Some("a.png"), b"x").await.is_ok());
    }
}
