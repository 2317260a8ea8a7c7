//! Plain-text renderer: a boxed line-item table under a centered header.

use royal_core::InvoiceDocument;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        object::{Columns, Rows},
        Alignment, Style, Theme, Width,
    },
};

use super::DocumentRenderer;

const MIN_ITEM_WIDTH: usize = 8;

/// Renders invoices as text, with long item names cut to `item_width`.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    item_width: usize,
}

impl TextRenderer {
    /// Widest item-name cell in characters; clamped to at least 8.
    pub fn with_item_width(item_width: usize) -> Self {
        TextRenderer {
            item_width: item_width.max(MIN_ITEM_WIDTH),
        }
    }

    fn table(&self, document: &InvoiceDocument) -> String {
        let mut builder = Builder::default();
        builder.push_record(document.columns.iter().map(String::as_str));
        for row in &document.rows {
            builder.push_record(row.cells());
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Columns::first(), Width::truncate(self.item_width).suffix("…"));
        table.modify(Columns::new(1..4), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        table.to_string()
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        TextRenderer::with_item_width(24)
    }
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &InvoiceDocument) -> String {
        let table = self.table(document);
        let width = table
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or_default();

        let mut lines = vec![
            format!("{:^width$}", document.header.business_name),
            format!("{:^width$}", document.header.date_line),
            String::new(),
        ];
        lines.extend(table.lines().map(str::to_string));
        lines.push(String::new());

        for line in &document.summary {
            if line.emphasized {
                lines.push("═".repeat(width));
            }
            let text = format!("{}: {}", line.label, line.value);
            lines.push(format!("{:>width$}", text));
        }

        let mut out = lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    fn row_with<'a>(out: &'a str, needle: &str) -> &'a str {
        out.lines().find(|l| l.contains(needle)).unwrap()
    }

    #[test]
    fn test_layout() {
        let out = TextRenderer::default().render(&fixtures::document());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0].trim(), "Royal Food Point");
        assert_eq!(lines[1].trim(), "Invoice Date: 2025-01-31");
        assert!(lines[3].starts_with('╭'));

        let header = row_with(&out, "Item");
        assert!(header.contains("Qty"));
        assert!(header.contains("Price"));

        assert!(row_with(&out, "Chicken Biryani").ends_with("Rs. 1000 │"));
        assert!(row_with(&out, "French Fries").ends_with("Rs. 300 │"));
    }

    #[test]
    fn test_summary_is_right_aligned_to_table() {
        let out = TextRenderer::default().render(&fixtures::document());
        let table_width = row_with(&out, "╭").chars().count();

        let total = out.lines().last().unwrap();
        assert_eq!(total.chars().count(), table_width);
        assert!(total.ends_with("Total: Rs. 1495"));
        assert!(out.contains("Tax (15%): Rs. 195"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let mut doc = fixtures::document();
        doc.rows[0].name = "Chicken Biryani Special Family Platter".to_string();

        let out = TextRenderer::with_item_width(12).render(&doc);
        assert!(out.contains('…'));
        assert!(!out.contains("Platter"));
        assert!(out.contains("French Fries"));

        assert_eq!(TextRenderer::with_item_width(2).item_width, MIN_ITEM_WIDTH);
    }
}
