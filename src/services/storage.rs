// src/services/storage.rs
use crate::errors::StudioError;
use crate::models::DisplayVariation;
use async_trait::async_trait;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Public URL prefix under which stored objects are served.
pub const PUBLIC_PREFIX: &str = "/overrides";

/// Writes product imagery and returns the URL it is served from.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(
        &self,
        product_id: &str,
        variation: DisplayVariation,
        bytes: &[u8],
    ) -> Result<String, StudioError>;
}

/// Stores objects as `{root}/{variation}/{product_id}.png`.
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn url_for(&self, variation: DisplayVariation, file_name: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.public_base_url,
            PUBLIC_PREFIX,
            variation.as_str(),
            file_name
        )
    }

    /// Lists `(product_id, url)` for every override image already on disk.
    pub async fn scan_overrides(&self) -> Result<Vec<(String, String)>, StudioError> {
        let dir = self.root.join(DisplayVariation::Digital.as_str());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StudioError::Storage(format!("Failed to create {}: {}", dir.display(), e)))?;

        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| StudioError::Storage(e.to_string()))?;

        let mut found = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StudioError::Storage(e.to_string()))?
        {
            let path = entry.path();
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase());
            let stem = path.file_stem().and_then(|s| s.to_str());
            match (stem, extension.as_deref()) {
                (Some(stem), Some("png" | "jpg" | "jpeg")) if validate_product_id(stem).is_ok() => {
                    let file_name = entry.file_name().to_string_lossy().into_owned();
                    found.push((
                        stem.to_string(),
                        self.url_for(DisplayVariation::Digital, &file_name),
                    ));
                }
                _ => warn!("Ignoring unexpected override file {}", path.display()),
            }
        }

        info!("Found {} override images in {}", found.len(), dir.display());
        Ok(found)
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(
        &self,
        product_id: &str,
        variation: DisplayVariation,
        bytes: &[u8],
    ) -> Result<String, StudioError> {
        validate_product_id(product_id)?;

        let dir = self.root.join(variation.as_str());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StudioError::Storage(format!("Failed to create {}: {}", dir.display(), e)))?;

        let file_name = format!("{}.png", product_id);
        let path = dir.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StudioError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

        info!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(self.url_for(variation, &file_name))
    }
}

/// Product ids become file names, so only a conservative alphabet is allowed.
pub fn validate_product_id(product_id: &str) -> Result<(), StudioError> {
    let valid = !product_id.is_empty()
        && product_id.len() <= 128
        && product_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StudioError::Validation(format!(
            "Invalid product id: {:?}",
            product_id
        )))
    }
}
