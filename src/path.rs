//! Storage layout for cached documents.
//!
//! Layout: `{storage_root}/{pluralized_template_name}/{filename}.pdf`.
//! Each template type gets its own pluralized folder inside the storage root.

use crate::entity::InvoiceRecord;
use std::path::{Path, PathBuf};

/// Pluralize a template name for its storage folder.
///
/// Covers the regular English cases this crate's template names use:
/// `invoice` → `invoices`, `packing_slip` → `packing_slips`,
/// `box` → `boxes`, `delivery` → `deliveries`.
pub fn pluralize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let es_suffixes = ["s", "x", "z", "ch", "sh"];
    if es_suffixes.iter().any(|s| name.ends_with(s)) {
        return format!("{}es", name);
    }

    if let Some(stem) = name.strip_suffix('y') {
        let preceded_by_vowel = stem
            .chars()
            .last()
            .is_some_and(|c| "aeiou".contains(c.to_ascii_lowercase()));
        if !preceded_by_vowel {
            return format!("{}ies", stem);
        }
    }

    format!("{}s", name)
}

/// Builder for document storage paths.
pub struct DocumentPath;

impl DocumentPath {
    /// Storage folder for a template, e.g. `tmp/pdf_prints/invoices`.
    pub fn storage_dir(storage_root: &Path, template: &str) -> PathBuf {
        storage_root.join(pluralize(template))
    }

    /// Full file path for a record's document under a template.
    ///
    /// The filename depends only on the record's
    /// [`pdf_filename`](InvoiceRecord::pdf_filename).
    pub fn file_path<T: InvoiceRecord>(storage_root: &Path, template: &str, record: &T) -> PathBuf {
        Self::storage_dir(storage_root, template).join(format!("{}.pdf", record.pdf_filename()))
    }
}
