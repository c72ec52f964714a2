//! Order store trait for abstracting record persistence.
//!
//! The `OrderRepository` trait decouples invoice-kit from the host's ORM.
//! It deliberately exposes two write paths:
//!
//! - [`save`](OrderRepository::save): the normal path, running whatever
//!   validation and change-notification the host wires up.
//! - [`write_invoice_fields`](OrderRepository::write_invoice_fields): a direct
//!   column write that skips validation and notification hooks. Invoice
//!   numbering uses this path on purpose, so the bypass is a visible choice
//!   at the interface rather than an implicit side-channel. Callers relying
//!   on save-hooks firing will not see them fire for number assignment.
//!
//! # Mocking for Tests
//!
//! `InMemoryOrderRepository` in this module is a straightforward mock that
//! counts `save` calls, so tests can assert that numbering never went through
//! the hooked path.

use crate::entity::InvoiceRecord;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Trait for order store implementations.
///
/// Abstracts record persistence, decoupling the toolkit from a specific ORM
/// or database client. Implementations: SQLx, Diesel, sea-orm, in-memory, etc.
///
/// **IMPORTANT:** All methods use `&self`; implementations should use interior
/// mutability or an external connection pool.
#[allow(async_fn_in_trait)]
pub trait OrderRepository<T: InvoiceRecord>: Send + Sync {
    /// Fetch a record by its order number.
    ///
    /// # Returns
    /// - `Ok(Some(record))` - Record found
    /// - `Ok(None)` - Record not found (not an error)
    ///
    /// # Errors
    /// Returns `Err` if the store is unavailable or the fetch fails
    async fn fetch_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Persist a record through the normal path.
    ///
    /// Runs host-side validation and change-notification. Not used by
    /// invoice numbering.
    ///
    /// # Errors
    /// Returns `Err` if validation or the write fails
    async fn save(&self, record: T) -> Result<()>;

    /// Write invoice number and date directly to storage.
    ///
    /// Skips validation and change-notification hooks. The columns are
    /// persisted together; a partial write must not be observable.
    ///
    /// # Errors
    /// Returns `Err(Error::Repository)` if the record does not exist or the
    /// write fails
    async fn write_invoice_fields(
        &self,
        id: &str,
        invoice_number: &str,
        invoice_date: NaiveDate,
    ) -> Result<()>;
}

// ============================================================================
// In-Memory Test Repository
// ============================================================================

/// Simple in-memory order store for testing.
///
/// Keeps records in a `DashMap` keyed by order number and counts how many
/// times the hooked [`save`](OrderRepository::save) path ran, so tests can
/// verify that numbering used the direct-write path.
#[derive(Clone)]
pub struct InMemoryOrderRepository<T: InvoiceRecord> {
    records: Arc<DashMap<String, T>>,
    save_count: Arc<AtomicUsize>,
}

impl<T: InvoiceRecord> InMemoryOrderRepository<T> {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryOrderRepository {
            records: Arc::new(DashMap::new()),
            save_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Insert a record keyed by its order number, without counting as a save.
    pub fn insert(&self, record: T) {
        self.records
            .insert(record.order_number().to_string(), record);
    }

    /// Number of times the hooked `save` path ran.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Return the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return true if the store contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: InvoiceRecord> Default for InMemoryOrderRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InvoiceRecord> OrderRepository<T> for InMemoryOrderRepository<T> {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<T>> {
        Ok(self.records.get(id).map(|r| r.clone()))
    }

    async fn save(&self, record: T) -> Result<()> {
        self.save_count.fetch_add(1, Ordering::SeqCst);
        self.records
            .insert(record.order_number().to_string(), record);
        Ok(())
    }

    async fn write_invoice_fields(
        &self,
        id: &str,
        invoice_number: &str,
        invoice_date: NaiveDate,
    ) -> Result<()> {
        let mut record = self
            .records
            .get_mut(id)
            .ok_or_else(|| Error::Repository(format!("no record with id {}", id)))?;
        record.set_invoice_fields(invoice_number.to_string(), invoice_date);
        debug!("✓ Direct write of invoice fields for {}", id);
        Ok(())
    }
}
