use std::{fs, io, path::PathBuf};

use anyhow::{anyhow, Context as _, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use gk_core::gateways::images::ImageStore;

/// Stores uploaded images as files in a local directory.
///
/// The returned URLs are relative to the server root, i.e.
/// `/uploads/<file name>`. Serving the directory under this
/// path is up to the web server.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    upload_dir: PathBuf,
    public_path: String,
}

pub const PUBLIC_PATH: &str = "/uploads";

impl FsImageStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Result<Self> {
        let upload_dir = upload_dir.into();
        fs::create_dir_all(&upload_dir).with_context(|| {
            format!(
                "Failed to create image upload directory {}",
                upload_dir.display()
            )
        })?;
        Ok(Self {
            upload_dir,
            public_path: PUBLIC_PATH.to_string(),
        })
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }
}

// Browsers submit images as data URIs,
// e.g. "data:image/jpeg;base64,<payload>".
fn strip_data_uri_prefix(payload: &str) -> &str {
    match payload.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => payload,
    }
}

impl ImageStore for FsImageStore {
    fn store(&self, base64_payload: &str, file_name: &str) -> Result<String> {
        let bytes = BASE64
            .decode(strip_data_uri_prefix(base64_payload).trim())
            .context("Failed to decode base64 image payload")?;
        let path = self.upload_dir.join(file_name);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write image file {}", path.display()))?;
        log::debug!("Stored image file {}", path.display());
        Ok(format!("{}/{file_name}", self.public_path))
    }

    fn remove(&self, url: &str) -> Result<()> {
        let file_name = url
            .rsplit('/')
            .next()
            .filter(|file_name| !file_name.is_empty())
            .ok_or_else(|| anyhow!("Invalid image URL: {url}"))?;
        let path = self.upload_dir.join(file_name);
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Removed image file {}", path.display());
                Ok(())
            }
            // Removals are best-effort, a missing file is not an error.
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_store() -> FsImageStore {
        let dir = std::env::temp_dir().join(format!(
            "gk-images-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        FsImageStore::new(dir).unwrap()
    }

    #[test]
    fn store_decodes_data_uri_payloads() {
        let store = new_store();
        let payload = format!("data:image/jpeg;base64,{}", BASE64.encode(b"jpeg bytes"));
        let url = store.store(&payload, "plant_123.jpg").unwrap();
        assert_eq!(url, "/uploads/plant_123.jpg");
        let written = fs::read(store.upload_dir().join("plant_123.jpg")).unwrap();
        assert_eq!(written, b"jpeg bytes");
    }

    #[test]
    fn store_accepts_bare_base64_payloads() {
        let store = new_store();
        let url = store.store(&BASE64.encode(b"raw"), "garden_7.jpg").unwrap();
        assert_eq!(url, "/uploads/garden_7.jpg");
    }

    #[test]
    fn store_rejects_invalid_base64() {
        let store = new_store();
        assert!(store.store("no base64 at all!", "user_1.jpg").is_err());
    }

    #[test]
    fn remove_ignores_missing_files() {
        let store = new_store();
        store.remove("/uploads/does-not-exist.jpg").unwrap();
    }

    #[test]
    fn remove_deletes_stored_files() {
        let store = new_store();
        let url = store.store(&BASE64.encode(b"x"), "tmp.jpg").unwrap();
        assert!(store.upload_dir().join("tmp.jpg").exists());
        store.remove(&url).unwrap();
        assert!(!store.upload_dir().join("tmp.jpg").exists());
    }
}
