//! Labeled creature sprite collection.
//!
//! 256x256 sprites with display names and multi-hot type vectors over a
//! fixed list of 18 types. The metadata table lists one sprite per data
//! row: filename, display name, then one flag per type in
//! [`CREATURE_TYPES`] order.
//!
//! # Example
//!
//! ```no_run
//! use semilla::datasets::creatures;
//! use semilla::CollectionOptions;
//!
//! let collection = creatures::load("datasets", CollectionOptions::new()).unwrap();
//! assert_eq!(collection.images.shape()[1..3], [256, 256]);
//! assert_eq!(collection.labels.cols(), creatures::CREATURE_TYPES.len());
//! ```

use std::path::Path;

use crate::collection::{load_collection, AlignedCollection, CollectionOptions, NameRule};
use crate::Result;

/// Relative path of the sprite metadata table under the datasets root.
const METADATA: &str = "creatures/creatures.csv";
/// Relative path of the sprite image directory under the datasets root.
const IMAGES: &str = "creatures/images";

/// Type names in the order used by the metadata flag columns and the
/// loaded label matrix.
pub const CREATURE_TYPES: [&str; 18] = [
    "Normal", "Fighting", "Flying", "Poison", "Ground", "Rock", "Bug", "Ghost", "Steel", "Fire",
    "Water", "Grass", "Electric", "Psychic", "Ice", "Dragon", "Dark", "Fairy",
];

/// The variant qualifier this dataset uses in display names.
const VARIANT_QUALIFIER: &str = "Mega";
/// Display names that keep both words under normalization.
const NAME_EXCEPTIONS: [&str; 1] = ["Mr. Mime"];

/// Returns the name normalization rule for this dataset: variant names
/// prefixed with `"Mega"` keep their second word, `"Mr. Mime"` keeps
/// both words.
#[must_use]
pub fn default_name_rule() -> NameRule {
    NameRule::new(
        VARIANT_QUALIFIER,
        NAME_EXCEPTIONS.iter().map(|s| (*s).to_string()).collect(),
    )
}

/// Loads the sprite collection from the datasets root.
///
/// Unless the options already carry a non-default [`NameRule`], the
/// dataset's own rule is installed, so
/// `CollectionOptions::new().full_names(false)` normalizes names the way
/// this dataset documents.
///
/// # Errors
///
/// Propagates every [`load_collection`] failure: missing files, row-count
/// or tag-length mismatches, undecodable or wrongly sized sprites.
pub fn load(root: impl AsRef<Path>, options: CollectionOptions) -> Result<AlignedCollection> {
    let root = root.as_ref();
    let options = if options.name_rule_is_default() {
        options.name_rule(default_name_rule())
    } else {
        options
    };
    load_collection(root.join(METADATA), root.join(IMAGES), options)
}

/// Returns the position of a type name in [`CREATURE_TYPES`], matching
/// the flag-column and label-matrix order.
#[must_use]
pub fn type_index(name: &str) -> Option<usize> {
    CREATURE_TYPES.iter().position(|t| *t == name)
}
