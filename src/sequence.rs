//! Sequence counter collaborator for invoice numbering.
//!
//! The numbering logic only requires two things from a counter: whether
//! numbering is enabled at all, and a way to draw the next number. Hosts
//! backing the counter with a database must make the increment atomic there;
//! the shipped [`CounterSequence`] is atomic within one process.

use crate::config::PrintConfig;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Trait for invoice number sources.
///
/// Implementations: in-process counter (provided), database sequence,
/// external numbering service, etc.
///
/// **IMPORTANT:** `next_number` uses `&self`; implementations must use
/// interior mutability and guarantee an atomic read-modify-write, otherwise
/// concurrent assignment calls can issue duplicate numbers.
pub trait InvoiceSequence: Send + Sync {
    /// Whether sequential numbering is enabled.
    ///
    /// When false, [`assign_invoice_number`](crate::numbering::assign_invoice_number)
    /// is a no-op.
    fn is_enabled(&self) -> bool;

    /// Draw the next invoice number, consuming it.
    ///
    /// Called at most once per successful assignment.
    ///
    /// # Errors
    /// Returns `Err(Error::Sequence)` if the counter cannot produce a value.
    fn next_number(&self) -> Result<String>;
}

/// In-process atomic counter with optional prefix and zero-padding.
///
/// Produces numbers like `42`, or `INV-0042` with a prefix and padding of 4.
/// `fetch_add` makes concurrent draws race-free within the process.
///
/// # Example
///
/// ```
/// use invoice_kit::sequence::{CounterSequence, InvoiceSequence};
///
/// let seq = CounterSequence::starting_at(5).with_prefix("INV-").with_padding(3);
/// assert_eq!(seq.next_number().unwrap(), "INV-005");
/// assert_eq!(seq.next_number().unwrap(), "INV-006");
/// ```
#[derive(Clone)]
pub struct CounterSequence {
    enabled: bool,
    prefix: String,
    zero_pad: usize,
    next: Arc<AtomicU64>,
}

impl CounterSequence {
    /// Create an enabled counter starting at 1, no prefix, no padding.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create an enabled counter continuing from a given number.
    pub fn starting_at(next: u64) -> Self {
        CounterSequence {
            enabled: true,
            prefix: String::new(),
            zero_pad: 0,
            next: Arc::new(AtomicU64::new(next)),
        }
    }

    /// Build a counter from configuration: enabled flag and seed.
    pub fn from_config(config: &PrintConfig) -> Self {
        CounterSequence {
            enabled: config.use_sequential_number,
            prefix: String::new(),
            zero_pad: 0,
            next: Arc::new(AtomicU64::new(config.next_number)),
        }
    }

    /// Create a disabled counter. `next_number` still works if called directly.
    pub fn disabled() -> Self {
        CounterSequence {
            enabled: false,
            prefix: String::new(),
            zero_pad: 0,
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Set a prefix, e.g. "INV-".
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set zero-padding width, e.g. 3 for "001". Zero means no padding.
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next.load(Ordering::SeqCst))
    }

    fn format(&self, num: u64) -> String {
        format!("{}{:0>width$}", self.prefix, num, width = self.zero_pad)
    }
}

impl Default for CounterSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceSequence for CounterSequence {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn next_number(&self) -> Result<String> {
        let num = self.next.fetch_add(1, Ordering::SeqCst);
        let formatted = self.format(num);
        debug!("✓ Sequence drew invoice number {}", formatted);
        Ok(formatted)
    }
}
