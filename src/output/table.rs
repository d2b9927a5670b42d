//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Message shown instead of an empty table
pub const EMPTY_MESSAGE: &str = "No results found.";

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format a single record as a two-column FIELD/VALUE table
pub fn format_details(fields: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["FIELD".to_string(), "VALUE".to_string()]);
    for (name, value) in fields {
        builder.push_record([name.to_string(), value.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct OfferRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "TITLE")]
        title: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<OfferRow> = vec![];
        assert_eq!(format_table(&rows), EMPTY_MESSAGE);
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            OfferRow {
                id: 1,
                title: "Rust Engineer".to_string(),
            },
            OfferRow {
                id: 2,
                title: "Data Analyst".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("TITLE"));
        assert!(result.contains("Rust Engineer"));
        assert!(result.contains("Data Analyst"));
        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
    }

    #[test]
    fn test_format_details() {
        let result = format_details(&[
            ("Role", "CANDIDATE".to_string()),
            ("Subject", "user@example.com".to_string()),
        ]);

        assert!(result.contains("FIELD"));
        assert!(result.contains("CANDIDATE"));
        assert!(result.contains("user@example.com"));
        assert!(result.contains("╰"));
    }
}
