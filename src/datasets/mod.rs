//! Bundled reference dataset wrappers.
//!
//! Thin, stateless entry points over the generic table and collection
//! machinery, one module per bundled dataset. Every function takes the
//! datasets root directory explicitly; how that root is located on disk
//! is the caller's concern. Every call re-reads from disk; nothing is
//! cached between calls.
//!
//! Expected layout under the root:
//!
//! ```text
//! datasets/
//!   unisex-names/unisex_names_table.csv
//!   most-common-name/new-top-firstNames.csv
//!   world-cities/world-cities.csv
//!   creatures/creatures.csv
//!   creatures/images/
//! ```
//!
//! # Example
//!
//! ```no_run
//! use semilla::datasets::{names, world_cities};
//!
//! let first_names = names::first_names("datasets", false).unwrap();
//! let countries = world_cities::countries("datasets", true).unwrap();
//! ```

pub mod creatures;
pub mod names;
pub mod world_cities;
