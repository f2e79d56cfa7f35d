//! Property-based tests for delimited table parsing and column
//! extraction.
//!
//! Uses proptest to verify the ordering, idempotence, and quote-stripping
//! invariants hold across random inputs.

use proptest::collection::vec;
use proptest::prelude::*;
use semilla::{ColumnOptions, DelimitedTable};

/// A single field: no separators, no quotes, no surrounding whitespace.
fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,8}"
}

/// A rectangular grid of fields with at least one row.
fn grid() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..6).prop_flat_map(|cols| vec(vec(field(), cols), 1..20))
}

/// Renders a grid as delimited text.
fn render(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    /// Extraction preserves row order exactly, minus the header.
    #[test]
    fn prop_column_order_matches_row_order(rows in grid()) {
        let table = DelimitedTable::parse(&render(&rows));
        let cols = rows[0].len();
        for index in 0..cols {
            let kept = table
                .column_with_options(index, ColumnOptions::new().skip_header(false))
                .unwrap();
            let expected: Vec<&String> = rows.iter().map(|row| &row[index]).collect();
            prop_assert_eq!(kept.len(), expected.len());
            for (got, want) in kept.iter().zip(expected) {
                prop_assert_eq!(got, want);
            }

            let skipped = table.column(index).unwrap();
            prop_assert_eq!(&kept[1..], &skipped[..]);
        }
    }

    /// Case-folding twice yields the same result as once.
    #[test]
    fn prop_lowercase_idempotent(rows in grid()) {
        let table = DelimitedTable::parse(&render(&rows));
        let options = ColumnOptions::new().skip_header(false).lowercase(true);
        let once = table.column_with_options(0, options).unwrap();
        let twice: Vec<String> = once.iter().map(|s| s.to_lowercase()).collect();
        prop_assert_eq!(once, twice);
    }

    /// Every quote character is removed from every field, wrapping or not.
    #[test]
    fn prop_quote_stripping_is_total(raw in vec("[A-Za-z\"]{0,8}", 1..8)) {
        let line = raw.join(",");
        let table = DelimitedTable::parse(&line);
        for row in table.rows() {
            for field in row {
                prop_assert!(!field.contains('"'));
            }
        }
        // Field values survive minus their quotes. An all-empty input
        // renders as an empty string, which parses to no rows at all.
        if let Some(first) = table.rows().first() {
            for (got, want) in first.iter().zip(&raw) {
                prop_assert_eq!(got.as_str(), want.replace('"', ""));
            }
        }
    }

    /// Parsing never fails and row count equals line count.
    #[test]
    fn prop_row_count_matches_line_count(rows in grid()) {
        let text = render(&rows);
        let table = DelimitedTable::parse(&text);
        prop_assert_eq!(table.num_rows(), rows.len());
    }
}
