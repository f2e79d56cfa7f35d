//! World city, country, and subcountry lists.
//!
//! One source table with columns city, country, subcountry. Source:
//! <https://github.com/fivethirtyeight/data> (world-cities).

use std::collections::BTreeSet;
use std::path::Path;

use crate::table::{ColumnOptions, DelimitedTable};
use crate::Result;

/// Relative path of the world cities table under the datasets root.
const WORLD_CITIES: &str = "world-cities/world-cities.csv";

/// City column index.
const CITY: usize = 0;
/// Country column index.
const COUNTRY: usize = 1;
/// Subcountry column index.
const SUBCOUNTRY: usize = 2;

/// Loads the unique country names, sorted alphabetically.
///
/// # Errors
///
/// Returns an error if the source table is missing, unreadable, or has a
/// row without a country column.
pub fn countries(root: impl AsRef<Path>, lowercase: bool) -> Result<Vec<String>> {
    let table = DelimitedTable::read(root.as_ref().join(WORLD_CITIES))?;
    let options = ColumnOptions::new().lowercase(lowercase);
    let unique: BTreeSet<String> = table.column_with_options(COUNTRY, options)?.into_iter().collect();
    Ok(unique.into_iter().collect())
}

/// Loads city names, optionally restricted to the given countries, in
/// source row order.
///
/// # Errors
///
/// Returns an error if the source table is missing, unreadable, or has a
/// row without a city or country column.
pub fn cities(root: impl AsRef<Path>, from_countries: Option<&[String]>) -> Result<Vec<String>> {
    filtered_column(root.as_ref(), CITY, from_countries)
}

/// Loads subcountry names, optionally restricted to the given countries,
/// in source row order.
///
/// # Errors
///
/// Returns an error if the source table is missing, unreadable, or has a
/// row without a subcountry or country column.
pub fn subcountries(
    root: impl AsRef<Path>,
    from_countries: Option<&[String]>,
) -> Result<Vec<String>> {
    filtered_column(root.as_ref(), SUBCOUNTRY, from_countries)
}

/// Extracts one column of the cities table, keeping only rows whose
/// country is in `from_countries` when a filter is given. The header row
/// is always dropped.
fn filtered_column(
    root: &Path,
    column: usize,
    from_countries: Option<&[String]>,
) -> Result<Vec<String>> {
    let table = DelimitedTable::read(root.join(WORLD_CITIES))?;
    let values = table.column(column)?;
    match from_countries {
        None => Ok(values),
        Some(wanted) => {
            let row_countries = table.column(COUNTRY)?;
            Ok(values
                .into_iter()
                .zip(row_countries)
                .filter(|(_, country)| wanted.contains(country))
                .map(|(value, _)| value)
                .collect())
        }
    }
}
