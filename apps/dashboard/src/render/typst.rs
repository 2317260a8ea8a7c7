//! Typst renderer.
//!
//! Emits a single A4 page of Typst markup. Compiling it with `typst compile`
//! produces the `Invoice_<date>.pdf` offered for download.

use royal_core::invoice::{InvoiceRow, PageSize, SummaryLine};
use royal_core::InvoiceDocument;

use super::DocumentRenderer;

const PAGE_FILL: &str = "#f6f6f6";
const HEADER_FILL: &str = "#e5e7eb";
const SHADED_FILL: &str = "#f3f4f6";

/// Renders invoices as Typst source.
#[derive(Debug, Clone, Default)]
pub struct TypstRenderer;

impl TypstRenderer {
    pub fn new() -> Self {
        TypstRenderer
    }

    fn paper(page_size: PageSize) -> &'static str {
        match page_size {
            PageSize::A4 => "a4",
        }
    }

    fn render_header(document: &InvoiceDocument, out: &mut String) {
        out.push_str("#align(center)[#text(size: 24pt, weight: \"bold\")[");
        out.push_str(&escape(&document.header.business_name));
        out.push_str("]]\n");
        out.push_str("#align(center)[");
        out.push_str(&escape(&document.header.date_line));
        out.push_str("]\n\n#v(12pt)\n\n");
    }

    fn render_table(document: &InvoiceDocument, out: &mut String) {
        out.push_str("#table(\n");
        out.push_str("  columns: (2fr, 1fr, 1fr, 1fr),\n");
        out.push_str("  stroke: 0.5pt + rgb(\"#d1d5db\"),\n");
        out.push_str("  inset: 6pt,\n");
        out.push_str("  table.header(\n");
        for column in &document.columns {
            out.push_str(&format!(
                "    table.cell(fill: rgb(\"{}\"))[*{}*],\n",
                HEADER_FILL,
                escape(column)
            ));
        }
        out.push_str("  ),\n");

        for row in &document.rows {
            Self::render_row(row, out);
        }

        out.push_str(")\n\n");
    }

    fn render_row(row: &InvoiceRow, out: &mut String) {
        for cell in row.cells() {
            if row.shaded {
                out.push_str(&format!(
                    "  table.cell(fill: rgb(\"{}\"))[{}],\n",
                    SHADED_FILL,
                    escape(cell)
                ));
            } else {
                out.push_str(&format!("  [{}],\n", escape(cell)));
            }
        }
    }

    fn render_summary(lines: &[SummaryLine], out: &mut String) {
        out.push_str("#v(16pt)\n");
        for line in lines {
            let text = format!("{}: {}", escape(&line.label), escape(&line.value));
            if line.emphasized {
                out.push_str(&format!(
                    "#align(right)[#text(size: 14pt, weight: \"bold\")[{}]]\n",
                    text
                ));
            } else {
                out.push_str(&format!("#align(right)[#text(size: 12pt)[{}]]\n", text));
            }
        }
    }
}

impl DocumentRenderer for TypstRenderer {
    fn extension(&self) -> &'static str {
        "typ"
    }

    fn render(&self, document: &InvoiceDocument) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "#set page(paper: \"{}\", margin: 30pt, fill: rgb(\"{}\"))\n",
            Self::paper(document.page_size),
            PAGE_FILL
        ));
        out.push_str("#set text(size: 11pt)\n\n");

        Self::render_header(document, &mut out);
        Self::render_table(document, &mut out);
        Self::render_summary(&document.summary, &mut out);

        out
    }
}

/// Escapes characters with markup meaning inside `[...]` content.
///
/// Line breaks become spaces, and a leading list or enum marker
/// (`-`, `+`, `1.`) is escaped so a cell never opens a list.
fn escape(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let trimmed = flat.trim_start();
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();

    let mut out = String::with_capacity(flat.len());
    for (i, ch) in trimmed.chars().enumerate() {
        let marker = (i == 0 && matches!(ch, '-' | '+')) || (digits > 0 && i == digits && ch == '.');
        if marker
            || matches!(
                ch,
                '\\' | '#' | '*' | '_' | '`' | '$' | '[' | ']' | '<' | '>' | '@' | '~' | '/' | '='
            )
        {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn test_page_setup() {
        let out = TypstRenderer::new().render(&fixtures::document());
        assert!(out.starts_with("#set page(paper: \"a4\""));
        assert!(out.contains("[Royal Food Point]"));
        assert!(out.contains("Invoice Date: 2025-01-31"));
    }

    #[test]
    fn test_rows_and_shading() {
        let out = TypstRenderer::new().render(&fixtures::document());

        // first row plain, second row shaded
        assert!(out.contains("  [Chicken Biryani],\n  [2],\n  [Rs. 500],\n  [Rs. 1000],\n"));
        assert!(out.contains("table.cell(fill: rgb(\"#f3f4f6\"))[French Fries]"));
        assert!(out.contains("[*Item*]"));
    }

    #[test]
    fn test_summary_block() {
        let out = TypstRenderer::new().render(&fixtures::document());
        assert!(out.contains("[Payment Method: cash]"));
        assert!(out.contains("[Subtotal: Rs. 1300]"));
        assert!(out.contains("[Tax (15%): Rs. 195]"));
        assert!(out.contains("weight: \"bold\")[Total: Rs. 1495]"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Fish & Chips"), "Fish & Chips");
        assert_eq!(escape("#1 Combo [XL]"), "\\#1 Combo \\[XL\\]");
        assert_eq!(escape("Half/Full"), "Half\\/Full");
    }

    #[test]
    fn test_escape_cannot_open_a_list() {
        assert_eq!(escape("Tea\n- Free refill"), "Tea - Free refill");
        assert_eq!(escape("- Free refill"), "\\- Free refill");
        assert_eq!(escape("+ Extra cheese"), "\\+ Extra cheese");
        assert_eq!(escape("2. Combo"), "2\\. Combo");
        assert_eq!(escape("Combo 2. Large"), "Combo 2. Large");
        assert!(!escape("Naan\r\n1. Garlic").contains('\n'));
    }
}
