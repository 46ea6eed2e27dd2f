//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    /// Character used for the rule under the header.
    pub fn with_separator(mut self, sep: &str) -> Self {
        self.separator = sep.chars().next().unwrap_or('-');
        self
    }

    /// Add a row, widening columns to fit its cells.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');

        let rule_len = self.columns.iter().map(|c| c.width).sum::<usize>()
            + 3 * self.columns.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(rule_len));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| pad_right(row.get(i).map(String::as_str).unwrap_or(""), col.width))
                .collect();
            out.push_str(cells.join(" | ").trim_end());
            out.push('\n');
        }

        out
    }
}
