//! Render cache - main entry point for document retrieval.
//!
//! Render-once, trust the cache: the first request for a document key
//! renders and stores the artifact, every later request returns the stored
//! bytes without re-rendering, even if the source record changes afterwards.
//! There is no invalidation path; callers depend on the immutability for
//! audit purposes.

use crate::config::PrintConfig;
use crate::entity::InvoiceRecord;
use crate::error::Result;
use crate::logo::{resolve_logo_path, AssetResolver, NoOpResolver};
use crate::path::DocumentPath;
use crate::renderer::DocumentRenderer;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// Filesystem-backed cache of rendered documents.
///
/// Built from a [`PrintConfig`] value; holds no global state. With
/// `store_pdf` disabled every call renders fresh and the filesystem is never
/// touched.
///
/// A per-key async mutex is held across the existence check, render, and
/// write, so within one process a missing key renders exactly once even
/// under concurrent requests. Across processes the write is last-wins; no
/// caller observes a torn artifact because bytes are read back under the
/// same guard.
///
/// # Example
///
/// ```ignore
/// let cache = RenderCache::new(&config);
/// let bytes = cache.document("invoice", &order, &renderer).await?;
/// ```
pub struct RenderCache {
    store_pdf: bool,
    storage_root: PathBuf,
    logo_path: Option<PathBuf>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RenderCache {
    /// Create a cache from configuration.
    ///
    /// The configured logo reference is resolved as a literal filesystem
    /// path. Use [`with_resolver`](Self::with_resolver) when the host has an
    /// asset pipeline.
    pub fn new(config: &PrintConfig) -> Self {
        Self::with_resolver(config, &NoOpResolver)
    }

    /// Create a cache from configuration, resolving the logo through the
    /// host's asset pipeline.
    pub fn with_resolver<R: AssetResolver>(config: &PrintConfig, resolver: &R) -> Self {
        let logo_path = resolve_logo_path(config.logo_path.as_deref(), resolver);

        RenderCache {
            store_pdf: config.store_pdf,
            storage_root: config.storage_path.clone(),
            logo_path,
            locks: DashMap::new(),
        }
    }

    /// The resolved logo path passed to the renderer, if any.
    pub fn logo_path(&self) -> Option<&Path> {
        self.logo_path.as_deref()
    }

    /// The cache file path a record's document would use under a template.
    pub fn file_path<T: InvoiceRecord>(&self, template: &str, record: &T) -> PathBuf {
        DocumentPath::file_path(&self.storage_root, template, record)
    }

    /// Whether a cached artifact exists for the given key.
    ///
    /// # Errors
    /// Returns `Err` if the filesystem cannot be queried
    pub async fn exists<T: InvoiceRecord>(&self, template: &str, record: &T) -> Result<bool> {
        Ok(fs::try_exists(self.file_path(template, record)).await?)
    }

    /// Return the rendered document for a record, from cache when possible.
    ///
    /// With caching disabled the renderer is called directly and its output
    /// returned; no filesystem interaction, renderer failures propagate
    /// unmodified.
    ///
    /// With caching enabled:
    /// 1. Compute `{root}/{pluralized template}/{filename}.pdf`, where the
    ///    filename is the invoice number if present, the order number
    ///    otherwise.
    /// 2. Take the per-key lock and create the folder (idempotent).
    /// 3. On miss, render and write the bytes; a renderer failure writes
    ///    nothing.
    /// 4. Read and return the file's contents, just-written or pre-existing.
    ///
    /// # Errors
    /// - `Error::Render`: the renderer failed (no artifact written)
    /// - `Error::PermissionDenied` / `Error::Io`: folder creation, write, or
    ///   read-back failed
    pub async fn document<T, R>(&self, template: &str, record: &T, renderer: &R) -> Result<Vec<u8>>
    where
        T: InvoiceRecord,
        R: DocumentRenderer<T>,
    {
        if !self.store_pdf {
            debug!(
                "Caching disabled, rendering {} for {} fresh",
                template,
                record.pdf_filename()
            );
            return renderer
                .render(template, record, self.logo_path.as_deref())
                .await;
        }

        let path = self.file_path(template, record);

        let lock = self.key_lock(template, record.pdf_filename());
        let _guard = lock.lock().await;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }

        if fs::try_exists(&path).await? {
            debug!("✓ RenderCache HIT {}", path.display());
        } else {
            debug!("✗ RenderCache MISS {}", path.display());
            let bytes = renderer
                .render(template, record, self.logo_path.as_deref())
                .await?;
            fs::write(&path, &bytes).await?;
            info!("✓ Stored {} ({} bytes)", path.display(), bytes.len());
        }

        Ok(fs::read(&path).await?)
    }

    fn key_lock(&self, template: &str, filename: &str) -> Arc<Mutex<()>> {
        let key = format!("{}:{}", template, filename);
        self.locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
