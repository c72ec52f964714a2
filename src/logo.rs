//! Logo asset resolution for the render context.
//!
//! A missing logo degrades the document (no logo image), it never blocks
//! invoice generation.

use std::path::PathBuf;

/// Trait mapping a logical asset reference to a filesystem path.
///
/// The host's asset pipeline implements this. A return of `None` means the
/// reference is unknown to the pipeline; [`resolve_logo_path`] then falls
/// back to treating the reference as a literal filesystem path.
pub trait AssetResolver: Send + Sync {
    /// Resolve an asset reference, or signal "not found".
    fn resolve(&self, reference: &str) -> Option<PathBuf>;
}

/// Resolver that knows no assets; every reference falls back to its literal
/// path.
#[derive(Clone, Default)]
pub struct NoOpResolver;

impl AssetResolver for NoOpResolver {
    fn resolve(&self, _reference: &str) -> Option<PathBuf> {
        None
    }
}

/// Resolve the configured logo reference to an existing filesystem path.
///
/// - Unconfigured or empty reference: `None`.
/// - Resolver hit: use the resolved path; resolver miss: treat the reference
///   as a literal path.
/// - Final path missing on disk: log a warning and return `None` rather than
///   failing the render.
pub fn resolve_logo_path<R: AssetResolver>(
    configured: Option<&str>,
    resolver: &R,
) -> Option<PathBuf> {
    let reference = match configured {
        Some(r) if !r.trim().is_empty() => r,
        _ => return None,
    };

    let path = resolver
        .resolve(reference)
        .unwrap_or_else(|| PathBuf::from(reference));

    if !path.exists() {
        warn!(
            "⚠ Logo file path '{}' does not exist - the logo image will not be included",
            path.display()
        );
        return None;
    }

    Some(path)
}
