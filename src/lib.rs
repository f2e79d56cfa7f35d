//! semilla - Read-only access to bundled reference datasets
//!
//! A small data-access convenience layer over a handful of bundled
//! reference datasets: English first-name lists, world city/country/
//! subcountry tables, and a labeled sprite collection. Its entire job is
//! to locate a bundled file, parse it, shape it into a simple in-memory
//! structure, and return it — no processing, no mutation, no caching.
//!
//! # Design Principles
//!
//! 1. **Stateless** - Every call re-reads from disk and fully
//!    materializes its result; no shared state between calls
//! 2. **Fail-fast** - Every error propagates immediately; no retries,
//!    no partial datasets
//! 3. **Positional** - The bundled tables are closed and versioned, so
//!    columns are addressed by index, not by schema
//!
//! # Quick Start
//!
//! ```no_run
//! use semilla::datasets::{creatures, names};
//! use semilla::CollectionOptions;
//!
//! // Column extraction over a bundled table
//! let first_names = names::first_names("datasets", true).unwrap();
//!
//! // Aligned sprite collection: images, names, and labels share one
//! // row-index space
//! let collection = creatures::load("datasets", CollectionOptions::new()).unwrap();
//! for i in 0..collection.len() {
//!     let _sprite = collection.images.image(i).unwrap();
//!     let _types = collection.labels.row(i).unwrap();
//!     let _name = &collection.names[i];
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod collection;
pub mod datasets;
pub mod error;
pub mod table;
pub mod tensor;

pub use collection::{
    load_collection, AlignedCollection, CollectionOptions, NameRule, IMAGE_SIDE,
};
pub use error::{Error, Result};
pub use table::{ColumnOptions, DelimitedTable};
pub use tensor::{ImageTensor, LabelMatrix};
