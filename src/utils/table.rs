//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{BOLD, RESET, paint};
use unicode_width::UnicodeWidthStr;

pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain<T: ToString>(text: T) -> Self {
        Self {
            text: text.to_string(),
            color: None,
        }
    }

    pub fn colored<T: ToString>(text: T, color: &'static str) -> Self {
        Self {
            text: text.to_string(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Pad by display width, so names with wide characters stay aligned.
fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.text.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(h.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        out.push_str(BOLD);
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad_right(h, *w));
            out.push(' ');
        }
        out.push_str(RESET);
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                let padded = pad_right(&cell.text, *w);
                match cell.color {
                    Some(c) => out.push_str(&paint(&padded, c)),
                    None => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
