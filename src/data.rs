//! Default Table Data
//!
//! Rows the board starts with and returns to on reset.

use crate::models::{SourceRow, TargetRow};

pub fn default_source_rows() -> Vec<SourceRow> {
    vec![
        SourceRow::new("1.2345", "Item 1"),
        SourceRow::new("2.3453", "Item 2"),
        SourceRow::new("3.4561", "Item 3"),
        SourceRow::new("4.5672", "Item 4"),
        SourceRow::new("5.6783", "Item 5"),
        SourceRow::new("6.7894", "Item 6"),
    ]
}

pub fn default_target_rows() -> Vec<TargetRow> {
    vec![
        TargetRow::new(1, "Site survey", "2024-03-01", "2024-03-03", ""),
        TargetRow::new(2, "Pour foundation", "2024-03-04", "2024-03-08", "1"),
        TargetRow::new(3, "Framing", "2024-03-11", "2024-03-22", "2"),
        TargetRow::new(4, "Electrical rough-in", "2024-03-25", "2024-03-29", "3"),
        TargetRow::new(5, "Roofing", "2024-03-25", "2024-04-02", "3"),
    ]
}
