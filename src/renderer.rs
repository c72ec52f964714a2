//! Document renderer collaborator.
//!
//! Rendering is an opaque external capability supplied by the host (a
//! templating or view layer producing PDF bytes). The cache treats it as a
//! callback: invoked on a miss, its failures propagate unmodified and leave
//! no cache artifact behind.

use crate::entity::InvoiceRecord;
use crate::error::Result;
use std::marker::PhantomData;
use std::path::Path;

/// Trait for document rendering implementations.
///
/// Given a template identifier, a record, and an optional auxiliary logo
/// path, produce the document's binary content.
#[allow(async_fn_in_trait)]
pub trait DocumentRenderer<T: InvoiceRecord>: Send + Sync {
    /// Render the template for a record into PDF bytes.
    ///
    /// `logo_path` is the resolved filesystem path of the logo asset, or
    /// `None` when unconfigured or unresolvable (the document is expected to
    /// render without a logo in that case).
    ///
    /// # Errors
    /// Returns `Err(Error::Render)` if the template is missing or rendering
    /// fails
    async fn render(&self, template: &str, record: &T, logo_path: Option<&Path>)
        -> Result<Vec<u8>>;
}

/// Adapter turning a plain closure into a [`DocumentRenderer`].
///
/// Convenient for tests and hosts whose rendering is synchronous.
///
/// # Example
///
/// ```ignore
/// let renderer = FnRenderer::new(|template, record: &Order, _logo| {
///     Ok(format!("%PDF {} {}", template, record.order_number()).into_bytes())
/// });
/// ```
pub struct FnRenderer<T, F> {
    render_fn: F,
    _record: PhantomData<fn(&T)>,
}

impl<T, F> FnRenderer<T, F>
where
    T: InvoiceRecord,
    F: Fn(&str, &T, Option<&Path>) -> Result<Vec<u8>> + Send + Sync,
{
    pub fn new(render_fn: F) -> Self {
        FnRenderer {
            render_fn,
            _record: PhantomData,
        }
    }
}

impl<T, F> DocumentRenderer<T> for FnRenderer<T, F>
where
    T: InvoiceRecord,
    F: Fn(&str, &T, Option<&Path>) -> Result<Vec<u8>> + Send + Sync,
{
    async fn render(
        &self,
        template: &str,
        record: &T,
        logo_path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        (self.render_fn)(template, record, logo_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    #[derive(Clone)]
    struct TestOrder {
        number: String,
    }

    impl InvoiceRecord for TestOrder {
        fn order_number(&self) -> &str {
            &self.number
        }

        fn invoice_number(&self) -> Option<&str> {
            None
        }

        fn invoice_date(&self) -> Option<NaiveDate> {
            None
        }

        fn set_invoice_fields(&mut self, _number: String, _date: NaiveDate) {}
    }

    #[tokio::test]
    async fn test_fn_renderer_passes_arguments() {
        let renderer = FnRenderer::new(|template: &str, record: &TestOrder, logo| {
            assert!(logo.is_none());
            Ok(format!("{}:{}", template, record.order_number()).into_bytes())
        });

        let order = TestOrder {
            number: "R100".to_string(),
        };

        let bytes = renderer
            .render("invoice", &order, None)
            .await
            .expect("Failed to render");
        assert_eq!(bytes, b"invoice:R100");
    }

    #[tokio::test]
    async fn test_fn_renderer_propagates_errors() {
        let renderer = FnRenderer::new(|_: &str, _: &TestOrder, _| {
            Err(Error::Render("template missing".to_string()))
        });

        let order = TestOrder {
            number: "R100".to_string(),
        };

        let result = renderer.render("invoice", &order, None).await;
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
