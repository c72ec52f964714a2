//! # invoice-kit
//!
//! Sequential invoice numbering and a filesystem-backed document render
//! cache, extracted from an e-commerce order-management extension into a
//! small reusable toolkit.
//!
//! ## Features
//!
//! - **Invoice Numbering:** Assigns a sequential number and date to an order
//!   record, exactly once, through an explicit direct-write path
//! - **Render Cache:** Renders a document once per key and serves the stored
//!   bytes forever after
//! - **Collaborator Traits:** The renderer, order store, sequence counter,
//!   and asset resolver are trait seams the host implements
//! - **Explicit Configuration:** A plain [`PrintConfig`] value passed in at
//!   call time, no process-wide state
//!
//! ## Quick Start
//!
//! ```ignore
//! use invoice_kit::{
//!     assign_invoice_number, InvoiceRecord, PrintConfig, RenderCache,
//!     renderer::FnRenderer, sequence::CounterSequence,
//! };
//! use chrono::NaiveDate;
//!
//! // 1. Implement InvoiceRecord for your order type
//! #[derive(Clone)]
//! struct Order {
//!     number: String,
//!     invoice_number: Option<String>,
//!     invoice_date: Option<NaiveDate>,
//! }
//!
//! impl InvoiceRecord for Order {
//!     fn order_number(&self) -> &str { &self.number }
//!     fn invoice_number(&self) -> Option<&str> { self.invoice_number.as_deref() }
//!     fn invoice_date(&self) -> Option<NaiveDate> { self.invoice_date }
//!     fn set_invoice_fields(&mut self, number: String, date: NaiveDate) {
//!         self.invoice_number = Some(number);
//!         self.invoice_date = Some(date);
//!     }
//! }
//!
//! // 2. Configure and number
//! let config = PrintConfig::default().with_sequential_number(true);
//! let sequence = CounterSequence::from_config(&config);
//! assign_invoice_number(&repo, &sequence, &order).await?;
//!
//! // 3. Render through the cache
//! let cache = RenderCache::new(&config);
//! let renderer = FnRenderer::new(|template, order: &Order, _logo| {
//!     Ok(render_with_your_pdf_engine(template, order))
//! });
//! let pdf_bytes = cache.document("invoice", &order, &renderer).await?;
//! ```
//!
//! ## Known limitations
//!
//! A cached artifact is never invalidated or re-rendered; two render
//! contexts mapping to the same filename share one artifact. Both are
//! deliberate (see [`RenderCache`]).

#[macro_use]
extern crate log;

pub mod cache;
pub mod config;
pub mod entity;
pub mod error;
pub mod logo;
pub mod numbering;
pub mod path;
pub mod renderer;
pub mod repository;
pub mod sequence;

// Re-exports for convenience
pub use cache::RenderCache;
pub use config::PrintConfig;
pub use entity::InvoiceRecord;
pub use error::{Error, Result};
pub use logo::{resolve_logo_path, AssetResolver};
pub use numbering::{assign_invoice_number, assign_invoice_number_on, AssignedInvoice};
pub use renderer::DocumentRenderer;
pub use repository::OrderRepository;
pub use sequence::InvoiceSequence;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
