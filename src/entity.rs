//! Core record trait that orders eligible for printing must implement.

use chrono::NaiveDate;

/// Trait for order records that can be numbered and printed.
///
/// The order number is the pre-existing, immutable identifier of the record.
/// The invoice number is assigned at most once by
/// [`assign_invoice_number`](crate::numbering::assign_invoice_number) and is
/// immutable once set.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use invoice_kit::InvoiceRecord;
///
/// #[derive(Clone)]
/// pub struct Order {
///     pub number: String,
///     pub invoice_number: Option<String>,
///     pub invoice_date: Option<NaiveDate>,
/// }
///
/// impl InvoiceRecord for Order {
///     fn order_number(&self) -> &str {
///         &self.number
///     }
///
///     fn invoice_number(&self) -> Option<&str> {
///         self.invoice_number.as_deref()
///     }
///
///     fn invoice_date(&self) -> Option<NaiveDate> {
///         self.invoice_date
///     }
///
///     fn set_invoice_fields(&mut self, number: String, date: NaiveDate) {
///         self.invoice_number = Some(number);
///         self.invoice_date = Some(date);
///     }
/// }
/// ```
pub trait InvoiceRecord: Send + Sync + Clone {
    /// The record's own immutable identifier.
    ///
    /// Used as the cache filename fallback when no invoice number is present.
    fn order_number(&self) -> &str;

    /// The assigned invoice number, if any.
    fn invoice_number(&self) -> Option<&str>;

    /// The date the invoice number was assigned, if any.
    fn invoice_date(&self) -> Option<NaiveDate>;

    /// Write both invoice fields onto the record.
    ///
    /// Called by in-memory stores when applying a direct write. Database-backed
    /// stores typically issue an UPDATE instead and never call this.
    fn set_invoice_fields(&mut self, number: String, date: NaiveDate);

    /// The filename (without extension) for this record's cached documents.
    ///
    /// Takes the invoice number when present, the order number otherwise.
    /// Two records mapping to the same filename share one cache artifact;
    /// after an external invoice-number reassignment the artifact may be
    /// stale. Accepted limitation.
    fn pdf_filename(&self) -> &str {
        self.invoice_number().unwrap_or_else(|| self.order_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestOrder {
        number: String,
        invoice_number: Option<String>,
        invoice_date: Option<NaiveDate>,
    }

    impl InvoiceRecord for TestOrder {
        fn order_number(&self) -> &str {
            &self.number
        }

        fn invoice_number(&self) -> Option<&str> {
            self.invoice_number.as_deref()
        }

        fn invoice_date(&self) -> Option<NaiveDate> {
            self.invoice_date
        }

        fn set_invoice_fields(&mut self, number: String, date: NaiveDate) {
            self.invoice_number = Some(number);
            self.invoice_date = Some(date);
        }
    }

    #[test]
    fn test_pdf_filename_prefers_invoice_number() {
        let order = TestOrder {
            number: "R100".to_string(),
            invoice_number: Some("INV-5".to_string()),
            invoice_date: None,
        };

        assert_eq!(order.pdf_filename(), "INV-5");
    }

    #[test]
    fn test_pdf_filename_falls_back_to_order_number() {
        let order = TestOrder {
            number: "R100".to_string(),
            invoice_number: None,
            invoice_date: None,
        };

        assert_eq!(order.pdf_filename(), "R100");
    }

    #[test]
    fn test_set_invoice_fields() {
        let mut order = TestOrder {
            number: "R100".to_string(),
            invoice_number: None,
            invoice_date: None,
        };

        let date = NaiveDate::from_ymd_opt(2026, 8, 27).expect("Invalid date");
        order.set_invoice_fields("42".to_string(), date);

        assert_eq!(order.invoice_number(), Some("42"));
        assert_eq!(order.invoice_date(), Some(date));
    }
}
