//! # Invoice Renderers
//!
//! Turn an [`InvoiceDocument`] into a file that can be printed or handed to a
//! PDF engine.
//!
//! ```text
//! InvoiceDocument ──► DocumentRenderer::render() ──► String ──► write_document()
//!                        │                                          │
//!                        ├─ TypstRenderer  (.typ, A4, shaded rows)  │
//!                        └─ TextRenderer   (.txt, tabled box)       ▼
//!                                                   <export_dir>/Invoice_<date>.<ext>
//! ```
//!
//! The document already carries every formatted value; renderers decide
//! layout only.

mod text;
mod typst;

use std::path::{Path, PathBuf};

use royal_core::InvoiceDocument;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use text::TextRenderer;
pub use typst::TypstRenderer;

/// A page layout for invoices.
pub trait DocumentRenderer: Send + Sync {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the complete file contents.
    fn render(&self, document: &InvoiceDocument) -> String;
}

/// Output format chosen on the billing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Typst source for the PDF engine.
    #[default]
    Typst,
    /// Plain text for receipt printers and logs.
    Text,
}

impl ExportFormat {
    pub fn renderer(&self) -> Box<dyn DocumentRenderer> {
        match self {
            ExportFormat::Typst => Box::new(TypstRenderer::new()),
            ExportFormat::Text => Box::new(TextRenderer::default()),
        }
    }
}

/// `Invoice_<date>.pdf` → `Invoice_<date>.<extension>`
pub fn file_name(document: &InvoiceDocument, extension: &str) -> String {
    let stem = document
        .download_name
        .strip_suffix(".pdf")
        .unwrap_or(&document.download_name);
    format!("{}.{}", stem, extension)
}

/// Renders `document` and writes it into `dir`, creating the folder if needed.
///
/// An existing file for the same date is overwritten.
pub async fn write_document(
    dir: &Path,
    document: &InvoiceDocument,
    renderer: &dyn DocumentRenderer,
) -> std::io::Result<PathBuf> {
    let content = renderer.render(document);
    let path = dir.join(file_name(document, renderer.extension()));

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, content.as_bytes()).await?;

    info!(path = %path.display(), bytes = content.len(), "Invoice written");
    Ok(path)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use royal_core::{Cart, FoodCategory, InvoiceComposer, InvoiceDocument, MenuItem, Money, PaymentMethod};

    /// Biryani ×2 + fries, paid cash on 2025-01-31.
    pub fn document() -> InvoiceDocument {
        let biryani = MenuItem::new("f1", "Chicken Biryani", FoodCategory::MainCourse, Money::from_major(500));
        let fries = MenuItem::new("f3", "French Fries", FoodCategory::Starter, Money::from_major(300));

        let mut cart = Cart::new();
        cart.add_item(&biryani);
        cart.add_item(&biryani);
        cart.add_item(&fries);
        cart.set_payment_method(PaymentMethod::Cash);

        let composer = InvoiceComposer::default();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        composer.document(&composer.compose(&cart, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_swaps_extension() {
        let doc = fixtures::document();
        assert_eq!(file_name(&doc, "typ"), "Invoice_2025-01-31.typ");
        assert_eq!(file_name(&doc, "txt"), "Invoice_2025-01-31.txt");
    }

    #[test]
    fn test_format_picks_renderer() {
        assert_eq!(ExportFormat::Typst.renderer().extension(), "typ");
        assert_eq!(ExportFormat::Text.renderer().extension(), "txt");
    }

    #[tokio::test]
    async fn test_write_document_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("invoices").join("january");
        let doc = fixtures::document();

        let path = write_document(&nested, &doc, &TextRenderer::default())
            .await
            .unwrap();

        assert_eq!(path, nested.join("Invoice_2025-01-31.txt"));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("Royal Food Point"));
        assert!(content.contains("Rs. 1495"));
    }
}
