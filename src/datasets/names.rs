//! English first-name lists.
//!
//! Two source tables, concatenated: a unisex names table (919 names) and
//! a most-common US first names table (100 names). Sources:
//! <https://github.com/fivethirtyeight/data> (unisex-names and
//! most-common-name).

use std::path::Path;

use crate::table::{ColumnOptions, DelimitedTable};
use crate::Result;

/// Relative path of the unisex names table under the datasets root.
const UNISEX_NAMES: &str = "unisex-names/unisex_names_table.csv";
/// Relative path of the common first names table under the datasets root.
const COMMON_NAMES: &str = "most-common-name/new-top-firstNames.csv";

/// Loads the bundled English first names, unisex table first, in source
/// row order.
///
/// # Errors
///
/// Returns an error if either source table is missing, unreadable, or has
/// a row without a name column.
pub fn first_names(root: impl AsRef<Path>, lowercase: bool) -> Result<Vec<String>> {
    let root = root.as_ref();
    let options = ColumnOptions::new().lowercase(lowercase);

    let mut names = DelimitedTable::read(root.join(UNISEX_NAMES))?.column_with_options(1, options)?;
    names.extend(
        DelimitedTable::read(root.join(COMMON_NAMES))?.column_with_options(1, options)?,
    );
    Ok(names)
}
