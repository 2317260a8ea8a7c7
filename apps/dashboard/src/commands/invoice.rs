//! # Invoice Commands
//!
//! Totals preview, document generation and file export for the current bill.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Complete Bill" clicked                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  lock cart ──► compose summary ──► shape document ──► unlock           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render (Typst / text) ──► tokio::fs::write ──► Invoice_<date>.<ext>   │
//! │                                                                         │
//! │  The cart lock is never held across the await.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use royal_core::validation::parse_invoice_date;
use royal_core::{CoreError, InvoiceDocument, InvoiceSummary};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::{ApiError, ApiResult};
use crate::render::{self, ExportFormat};
use crate::state::{CartState, ConfigState};

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedInvoice {
    /// Where the rendered file was written.
    pub path: PathBuf,
    /// Name the PDF is offered under: `Invoice_<date>.pdf`
    pub download_name: String,
    pub format: ExportFormat,
    pub summary: InvoiceSummary,
}

/// Live totals for the bill panel. Empty bills are fine here (all zeros).
///
/// `date` is `YYYY-MM-DD`; today's local date when omitted.
pub fn preview_invoice(
    cart: &CartState,
    config: &ConfigState,
    date: Option<&str>,
) -> ApiResult<InvoiceSummary> {
    debug!(?date, "preview_invoice command");

    let date = resolve_date(date)?;
    let composer = config.composer();
    cart.with_cart(|c| composer.compose(c, date))
}

/// Builds the printable document for the current bill.
///
/// ## Errors
/// - `CART_ERROR` when the bill has no lines
pub fn generate_invoice(
    cart: &CartState,
    config: &ConfigState,
    date: Option<&str>,
) -> ApiResult<InvoiceDocument> {
    debug!(?date, "generate_invoice command");

    let date = resolve_date(date)?;
    let summary = compose_non_empty(cart, config, date)?;
    Ok(config.composer().document(&summary))
}

/// Renders the current bill and writes it into the configured export folder.
///
/// The bill is left as is; the UI decides whether to clear it afterwards.
///
/// ## Errors
/// - `CART_ERROR` when the bill has no lines
/// - `EXPORT_ERROR` when the file cannot be written
pub async fn export_invoice(
    cart: &CartState,
    config: &ConfigState,
    format: ExportFormat,
    date: Option<&str>,
) -> ApiResult<ExportedInvoice> {
    debug!(?format, ?date, "export_invoice command");

    let date = resolve_date(date)?;
    let summary = compose_non_empty(cart, config, date)?;
    let document = config.composer().document(&summary);
    let renderer = format.renderer();

    let path = render::write_document(&config.export_dir, &document, renderer.as_ref())
        .await
        .map_err(|e| {
            error!(dir = %config.export_dir.display(), error = %e, "Invoice export failed");
            ApiError::export(format!("Could not write invoice: {}", e))
        })?;

    info!(path = %path.display(), total = %summary.total, "Invoice exported");

    Ok(ExportedInvoice {
        path,
        download_name: document.download_name,
        format,
        summary,
    })
}

fn compose_non_empty(cart: &CartState, config: &ConfigState, date: NaiveDate) -> ApiResult<InvoiceSummary> {
    let composer = config.composer();
    let summary = cart.with_cart(|c| composer.compose(c, date))?;

    if summary.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }
    Ok(summary)
}

/// An explicit `YYYY-MM-DD`, else today's UTC date.
fn resolve_date(date: Option<&str>) -> ApiResult<NaiveDate> {
    match date {
        Some(raw) => Ok(parse_invoice_date(raw)?),
        None => Ok(Utc::now().date_naive()),
    }
}
