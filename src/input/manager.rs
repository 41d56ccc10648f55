//! Input manager for handling different file types

use crate::error::{AtsMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_from_bytes;
use log::info;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Routes files to the right extractor and caches extracted text.
///
/// The cache is keyed by a SHA-256 hash of the file bytes, so the same
/// document uploaded under two names extracts once, and a changed file
/// re-extracts even under the old name. The profile builder downstream
/// stays stateless; this is the only place "seen before" lives.
pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(AtsMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(AtsMatcherError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let key = content_hash(&bytes);

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&key) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        info!("Extracting text from: {}", path.display());
        let text = extract_from_bytes(&bytes, &file_type)?;

        if self.enable_cache {
            self.cache.insert(key, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AtsMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
