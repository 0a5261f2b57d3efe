//! Topic image resolution
//!
//! Every topic image is probed once at startup. A path that is missing or
//! cannot be decoded becomes [`AssetStatus::Missing`] and the widgets fall
//! back to a warning; it never aborts startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::topic::TopicRegistry;

/// Resolution result for one image path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// File exists and its header decoded
    Available { width: u32, height: u32 },
    /// File is absent or unreadable
    Missing { reason: String },
}

impl AssetStatus {
    /// Probe a single path by decoding only the image header
    pub fn probe(path: &Path) -> Self {
        if !path.exists() {
            return AssetStatus::Missing {
                reason: "file does not exist".to_string(),
            };
        }
        match image::image_dimensions(path) {
            Ok((width, height)) => AssetStatus::Available { width, height },
            Err(e) => AssetStatus::Missing {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AssetStatus::Available { .. })
    }
}

/// Probed status for every image referenced by a [`TopicRegistry`]
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    statuses: HashMap<PathBuf, AssetStatus>,
}

impl AssetCatalog {
    pub fn probe(registry: &TopicRegistry) -> Self {
        let mut statuses = HashMap::new();
        for topic in registry.iter() {
            for path in [&topic.image, &topic.extra_image] {
                let status = AssetStatus::probe(path);
                if let AssetStatus::Missing { reason } = &status {
                    tracing::warn!("Image not found: {} ({})", path.display(), reason);
                }
                statuses.insert(path.clone(), status);
            }
        }
        Self { statuses }
    }

    /// Status for a path. Paths that were never probed count as missing.
    pub fn status(&self, path: &Path) -> AssetStatus {
        self.statuses
            .get(path)
            .cloned()
            .unwrap_or_else(|| AssetStatus::Missing {
                reason: "not probed".to_string(),
            })
    }

    pub fn is_available(&self, path: &Path) -> bool {
        self.statuses
            .get(path)
            .map(AssetStatus::is_available)
            .unwrap_or(false)
    }

    pub fn available_count(&self) -> usize {
        self.statuses.values().filter(|s| s.is_available()).count()
    }

    /// Override one entry (used when a caller already knows the outcome)
    pub fn insert(&mut self, path: impl Into<PathBuf>, status: AssetStatus) {
        self.statuses.insert(path.into(), status);
    }
}
