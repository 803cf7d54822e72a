//! Tabular projection of extracted records
//!
//! A [`ResourceTable`] holds the extracted records of one resource type and
//! the column set derived from them. It renders as a GitHub pipe table for
//! inclusion in prompts.

use crate::core::extract::{ExtractedRecord, FieldValue};
use serde::Serialize;

/// Extracted records of one resource type with a uniform column set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceTable {
    columns: Vec<&'static str>,
    records: Vec<ExtractedRecord>,
}

impl ResourceTable {
    /// Project records into a table.
    ///
    /// Columns are the union of the records' columns in first-seen order. An
    /// empty input yields a table with no columns.
    pub fn project(records: Vec<ExtractedRecord>) -> Self {
        let mut columns: Vec<&'static str> = Vec::new();
        for column in records.iter().flat_map(ExtractedRecord::columns) {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        Self { columns, records }
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn records(&self) -> &[ExtractedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row of display cells for one record, in table column order
    fn row(&self, record: &ExtractedRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| {
                record
                    .get(column)
                    .map(FieldValue::to_string)
                    .map(|cell| escape_cell(&cell))
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Render as a pipe table: header, dash separator, one row per record.
    ///
    /// Missing and null cells are empty. An empty table renders as `""`.
    pub fn to_grid(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let rows: Vec<Vec<String>> = self.records.iter().map(|r| self.row(r)).collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain([column.chars().count(), 3])
                    .max()
                    .unwrap_or(3)
            })
            .collect();

        let header: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(grid_line(&header, &widths));
        lines.push(grid_line(&separator, &widths));
        lines.extend(rows.iter().map(|row| grid_line(row, &widths)));
        lines.join("\n")
    }
}

fn grid_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Keep a value on one grid line and out of the column separators
fn escape_cell(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&'static str, &str)]) -> ExtractedRecord {
        pairs
            .iter()
            .fold(ExtractedRecord::new(), |r, (c, v)| r.with(*c, *v))
    }

    #[test]
    fn test_empty_projection_has_no_columns() {
        let table = ResourceTable::project(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert_eq!(table.to_grid(), "");
    }

    #[test]
    fn test_columns_are_union_in_first_seen_order() {
        let table = ResourceTable::project(vec![
            record(&[("b", "1"), ("a", "2")]),
            record(&[("a", "3"), ("c", "4")]),
        ]);
        assert_eq!(table.columns(), &["b", "a", "c"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_grid_rendering() {
        let table = ResourceTable::project(vec![
            record(&[("name", "Asthma"), ("status", "active")]),
            ExtractedRecord::new()
                .with("name", "Hypertension")
                .with("status", None::<i64>),
        ]);

        let expected = "\
| name         | status |
| ------------ | ------ |
| Asthma       | active |
| Hypertension |        |";
        assert_eq!(table.to_grid(), expected);
    }

    #[test]
    fn test_missing_cells_render_empty() {
        let table = ResourceTable::project(vec![
            record(&[("a", "x")]),
            record(&[("b", "y")]),
        ]);
        let grid = table.to_grid();
        assert_eq!(grid.lines().nth(2), Some("| x   |     |"));
        assert_eq!(grid.lines().nth(3), Some("|     | y   |"));
    }

    #[test]
    fn test_cells_are_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line one\nline two\r\n"), "line one line two");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let build = || {
            ResourceTable::project(vec![record(&[("k", "v"), ("n", "1")])]).to_grid()
        };
        assert_eq!(build(), build());
    }
}
