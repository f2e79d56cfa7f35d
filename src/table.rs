//! Delimited table reading and positional column extraction.
//!
//! The bundled datasets are closed, versioned files, so the parser here is
//! deliberately simple: one row per line, fields split on commas, every
//! double-quote character removed. There is no support for separators
//! embedded inside quoted fields; a comma inside quotes is still a field
//! boundary. This matches the bundled files, which contain no such rows.
//!
//! # Example
//!
//! ```
//! use semilla::DelimitedTable;
//!
//! let table = DelimitedTable::parse("id,name\n1,\"Alice\"\n2,Bob");
//! let names = table.column(1).unwrap();
//! assert_eq!(names, vec!["Alice", "Bob"]);
//! ```

use std::path::Path;

use crate::error::{Error, Result};

/// Options for positional column extraction.
///
/// Defaults: the first row is treated as a header and skipped, values are
/// returned as-is without case-folding.
#[derive(Debug, Clone, Copy)]
pub struct ColumnOptions {
    /// Whether to drop the first row (conventionally a header).
    pub skip_header: bool,
    /// Whether to case-fold the extracted values.
    pub lowercase: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            skip_header: true,
            lowercase: false,
        }
    }
}

impl ColumnOptions {
    /// Creates options with the defaults (skip header, no case-folding).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to drop the first row.
    #[must_use]
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Sets whether to case-fold the extracted values.
    #[must_use]
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

/// A parsed delimited text file: an ordered sequence of rows of string
/// fields.
///
/// Rows are not validated for a consistent field count; a malformed row is
/// simply shorter or longer than its neighbors and only surfaces as an
/// error when a column access reaches past its end.
///
/// Tables are constructed fresh on every read and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedTable {
    rows: Vec<Vec<String>>,
}

impl DelimitedTable {
    /// Reads and parses a delimited text file.
    ///
    /// Each line becomes one row: the line is trimmed, split on `,`, and
    /// every `"` occurrence is removed from each field (not just wrapping
    /// quotes).
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be read.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Ok(Self::parse(&contents))
    }

    /// Parses delimited text from an in-memory string.
    ///
    /// Same splitting rules as [`DelimitedTable::read`]. Blank trailing
    /// content produces no row; interior blank lines produce a single
    /// empty field, as they do in the bundled files' source format.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let rows = contents
            .lines()
            .map(|line| {
                line.trim()
                    .split(',')
                    .map(|field| field.replace('"', ""))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Returns the parsed rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows, header included.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extracts one column by zero-based index with the default options
    /// (header skipped, no case-folding).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any row is shorter than
    /// `index + 1`.
    pub fn column(&self, index: usize) -> Result<Vec<String>> {
        self.column_with_options(index, ColumnOptions::default())
    }

    /// Extracts one column by zero-based index.
    ///
    /// Output order matches row order exactly, minus the optional header.
    /// The header row, when skipped, is still subject to the bounds check:
    /// a short header fails like any other short row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any row is shorter than
    /// `index + 1`.
    pub fn column_with_options(&self, index: usize, options: ColumnOptions) -> Result<Vec<String>> {
        let mut entries = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let field = row.get(index).ok_or(Error::IndexOutOfBounds {
                index,
                len: row.len(),
            })?;
            if options.lowercase {
                entries.push(field.to_lowercase());
            } else {
                entries.push(field.clone());
            }
        }
        if options.skip_header && !entries.is_empty() {
            entries.remove(0);
        }
        Ok(entries)
    }
}
