//! Print configuration passed explicitly into operations.
//!
//! The original extension this crate generalizes kept these flags in global
//! mutable configuration. Here the configuration is a plain value the caller
//! constructs and hands to [`RenderCache`](crate::cache::RenderCache) and the
//! numbering helpers, which keeps both independently testable.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_store_pdf() -> bool {
    true
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("tmp/pdf_prints")
}

fn default_next_number() -> u64 {
    1
}

/// Configuration for invoice numbering and document caching.
///
/// # Example
///
/// ```
/// use invoice_kit::PrintConfig;
///
/// let config = PrintConfig::default()
///     .with_sequential_number(true)
///     .with_storage_path("var/prints");
///
/// assert!(config.store_pdf);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Gate for sequential invoice numbering. Disabled by default.
    #[serde(default)]
    pub use_sequential_number: bool,

    /// Gate for caching rendered documents on disk.
    ///
    /// When false every request renders fresh and the filesystem is never
    /// touched.
    #[serde(default = "default_store_pdf")]
    pub store_pdf: bool,

    /// Base directory for cached documents.
    ///
    /// Each template gets its own pluralized folder inside this directory,
    /// e.g. `tmp/pdf_prints/invoices/`.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Logical asset reference for the logo image included in documents.
    ///
    /// Resolved through an [`AssetResolver`](crate::logo::AssetResolver) at
    /// render time; a missing logo degrades the document, never the render.
    #[serde(default)]
    pub logo_path: Option<String>,

    /// Seed for a counter built from this configuration.
    #[serde(default = "default_next_number")]
    pub next_number: u64,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            use_sequential_number: false,
            store_pdf: default_store_pdf(),
            storage_path: default_storage_path(),
            logo_path: None,
            next_number: default_next_number(),
        }
    }
}

impl PrintConfig {
    /// Enable or disable sequential invoice numbering.
    pub fn with_sequential_number(mut self, enabled: bool) -> Self {
        self.use_sequential_number = enabled;
        self
    }

    /// Enable or disable on-disk document caching.
    pub fn with_store_pdf(mut self, enabled: bool) -> Self {
        self.store_pdf = enabled;
        self
    }

    /// Set the base directory for cached documents.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Set the logo asset reference.
    pub fn with_logo_path(mut self, reference: impl Into<String>) -> Self {
        self.logo_path = Some(reference.into());
        self
    }

    /// Set the starting value for the invoice counter.
    pub fn with_next_number(mut self, next: u64) -> Self {
        self.next_number = next;
        self
    }

    /// Parse configuration from a JSON string.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the file is missing, `Error::Config` if
    /// the JSON is malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrintConfig::default();
        assert!(!config.use_sequential_number);
        assert!(config.store_pdf);
        assert_eq!(config.storage_path, PathBuf::from("tmp/pdf_prints"));
        assert_eq!(config.logo_path, None);
        assert_eq!(config.next_number, 1);
    }

    #[test]
    fn test_builder_setters() {
        let config = PrintConfig::default()
            .with_sequential_number(true)
            .with_store_pdf(false)
            .with_storage_path("var/prints")
            .with_logo_path("logo/acme.png")
            .with_next_number(100);

        assert!(config.use_sequential_number);
        assert!(!config.store_pdf);
        assert_eq!(config.storage_path, PathBuf::from("var/prints"));
        assert_eq!(config.logo_path.as_deref(), Some("logo/acme.png"));
        assert_eq!(config.next_number, 100);
    }

    #[test]
    fn test_from_json_str_partial() {
        let config = PrintConfig::from_json_str(r#"{"use_sequential_number": true}"#)
            .expect("Failed to parse config");

        assert!(config.use_sequential_number);
        // Unspecified fields keep their defaults
        assert!(config.store_pdf);
        assert_eq!(config.storage_path, PathBuf::from("tmp/pdf_prints"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = PrintConfig::from_json_str("{not json");
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = PrintConfig::from_json_file("does/not/exist.json");
        assert!(matches!(result, Err(crate::error::Error::NotFound(_))));
    }
}
