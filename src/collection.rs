//! Aligned multi-source loading for labeled image collections.
//!
//! A collection is driven by a metadata table whose data rows list an
//! image filename, a display name, and a fixed-length vector of category
//! flags. The loader decodes every referenced image and produces three
//! parallel sequences sharing one row-index space: position `i` in the
//! image tensor, the name list, and the label matrix all come from
//! metadata row `i`. Directory listing order is only used to validate the
//! file count; it never determines row correspondence.
//!
//! The whole collection is materialized eagerly, so the cost of one call
//! is `len * height * width * channels` bytes. That is fine for the
//! bundled collections; it is a scaling limit for anything larger.

use std::{fs, path::Path};

use crate::{
    error::{Error, Result},
    table::DelimitedTable,
    tensor::{ImageTensor, LabelMatrix},
};

/// Fixed side length of collection images, in pixels.
pub const IMAGE_SIDE: usize = 256;

/// Display-name normalization rule.
///
/// Normalization keeps only the main word of a multi-word display name:
/// a name on the exception list is kept whole, a name starting with the
/// qualifier token keeps its second word, and any other name keeps its
/// first word. The qualifier and exception list are dataset-specific
/// data, supplied by the caller rather than baked in here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRule {
    qualifier: String,
    exceptions: Vec<String>,
}

impl NameRule {
    /// Creates a rule with the given qualifier token and exception list.
    pub fn new(qualifier: impl Into<String>, exceptions: Vec<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            exceptions,
        }
    }

    /// Returns the qualifier token.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Returns the exception list.
    #[must_use]
    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    /// Normalizes one display name.
    ///
    /// A qualifier-prefixed name with no second word falls back to the
    /// qualifier itself rather than failing.
    #[must_use]
    pub fn normalize(&self, name: &str) -> String {
        if self.exceptions.iter().any(|e| e == name) {
            return name.to_string();
        }
        let mut words = name.split_whitespace();
        match words.next() {
            Some(first) if first == self.qualifier => words.next().unwrap_or(first).to_string(),
            Some(first) => first.to_string(),
            None => name.to_string(),
        }
    }
}

/// Options for [`load_collection`].
///
/// Defaults: 3 channels (no alpha), full display names, empty name rule.
#[derive(Debug, Clone)]
pub struct CollectionOptions {
    include_alpha: bool,
    full_names: bool,
    name_rule: NameRule,
}

impl CollectionOptions {
    /// Creates options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_alpha: false,
            full_names: true,
            name_rule: NameRule::default(),
        }
    }

    /// Sets whether to decode 4 channels instead of 3.
    ///
    /// When set, source files are expected to carry an alpha channel;
    /// for sources without one the decoder fills alpha as fully opaque.
    #[must_use]
    pub fn include_alpha(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }

    /// Sets whether to return full display names (`true`, the default)
    /// or names normalized through the configured [`NameRule`].
    #[must_use]
    pub fn full_names(mut self, full_names: bool) -> Self {
        self.full_names = full_names;
        self
    }

    /// Sets the normalization rule applied when `full_names` is off.
    #[must_use]
    pub fn name_rule(mut self, rule: NameRule) -> Self {
        self.name_rule = rule;
        self
    }

    /// Returns true if the normalization rule is still the empty default.
    #[must_use]
    pub fn name_rule_is_default(&self) -> bool {
        self.name_rule == NameRule::default()
    }

    /// Returns the number of channels this configuration decodes.
    #[must_use]
    pub fn channels(&self) -> usize {
        if self.include_alpha {
            4
        } else {
            3
        }
    }
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Three parallel sequences sharing one row-index space.
///
/// Position `i` in `images`, `names`, and `labels` corresponds to the
/// same metadata row.
#[derive(Debug, Clone)]
pub struct AlignedCollection {
    /// Decoded images, shape `[len, 256, 256, channels]`.
    pub images: ImageTensor,
    /// Display names, one per row.
    pub names: Vec<String>,
    /// Category flag vectors, shape `[len, categories]`.
    pub labels: LabelMatrix,
}

impl AlignedCollection {
    /// Returns the number of aligned rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the collection holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Loads an aligned image collection.
///
/// `metadata_path` is a delimited table whose row 0 is a header and whose
/// data rows list: image filename, display name, then one flag per
/// category. `images_dir` must contain exactly one file per data row.
/// The category count is taken from the first data row; every other row
/// must match it.
///
/// # Errors
///
/// - [`Error::Io`] if the metadata file or a referenced image is missing
///   or unreadable.
/// - [`Error::ShapeMismatch`] if the data-row count differs from the
///   image-file count, a tag vector has the wrong length, or a decoded
///   image is not 256x256. Nothing is truncated to recover.
/// - [`Error::Decode`] if an image file exists but cannot be decoded.
/// - [`Error::IndexOutOfBounds`] if a data row lacks the filename or
///   name field.
/// - [`Error::Parse`] if a tag value is not numeric.
pub fn load_collection(
    metadata_path: impl AsRef<Path>,
    images_dir: impl AsRef<Path>,
    options: CollectionOptions,
) -> Result<AlignedCollection> {
    let images_dir = images_dir.as_ref();
    let metadata = DelimitedTable::read(metadata_path)?;

    let file_count = count_files(images_dir)?;
    let rows = metadata.rows();
    // Row 0 is always a header.
    let data_rows = rows.get(1..).unwrap_or(&[]);
    if data_rows.len() != file_count {
        return Err(Error::shape_mismatch(format!(
            "metadata has {} data rows but {:?} contains {} files",
            data_rows.len(),
            images_dir,
            file_count
        )));
    }

    let len = data_rows.len();
    let channels = options.channels();
    let categories = data_rows
        .first()
        .map(|row| row.len().saturating_sub(2))
        .unwrap_or(0);

    let mut images = ImageTensor::new(len, IMAGE_SIDE, IMAGE_SIDE, channels);
    let mut labels = LabelMatrix::new(len, categories);
    let mut names = Vec::with_capacity(len);
    let stride = IMAGE_SIDE * IMAGE_SIDE * channels;

    for (i, row) in data_rows.iter().enumerate() {
        let filename = row.first().ok_or(Error::IndexOutOfBounds {
            index: 0,
            len: row.len(),
        })?;
        let display_name = row.get(1).ok_or(Error::IndexOutOfBounds {
            index: 1,
            len: row.len(),
        })?;

        let tags = &row[2..];
        if tags.len() != categories {
            return Err(Error::shape_mismatch(format!(
                "row {} has {} tag values, expected {}",
                i + 1,
                tags.len(),
                categories
            )));
        }
        for (k, tag) in tags.iter().enumerate() {
            let value: f32 = tag
                .trim()
                .parse()
                .map_err(|_| Error::parse(format!("invalid tag value '{tag}' in row {}", i + 1)))?;
            labels.set(i, k, value);
        }

        let path = images_dir.join(filename);
        let pixels = decode_image(&path, options.include_alpha)?;
        images.as_mut_slice()[i * stride..(i + 1) * stride].copy_from_slice(&pixels);

        if options.full_names {
            names.push(display_name.clone());
        } else {
            names.push(options.name_rule.normalize(display_name));
        }
    }

    Ok(AlignedCollection {
        images,
        names,
        labels,
    })
}

/// Counts directory entries that are files.
fn count_files(dir: &Path) -> Result<usize> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(e, dir))?;
    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(e, dir))?;
        if entry.file_type().map_err(|e| Error::io(e, dir))?.is_file() {
            count += 1;
        }
    }
    Ok(count)
}

/// Decodes one image file into a raw 256x256 pixel buffer.
fn decode_image(path: &Path, include_alpha: bool) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| Error::io(e, path))?;
    let decoded = image::load_from_memory(&bytes).map_err(|e| Error::decode(e, path))?;

    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    if width != IMAGE_SIDE || height != IMAGE_SIDE {
        return Err(Error::shape_mismatch(format!(
            "image {:?} is {}x{}, expected {}x{}",
            path, width, height, IMAGE_SIDE, IMAGE_SIDE
        )));
    }

    if include_alpha {
        Ok(decoded.into_rgba8().into_raw())
    } else {
        Ok(decoded.into_rgb8().into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> NameRule {
        NameRule::new("Mega", vec!["Mr. Mime".to_string()])
    }

    #[test]
    fn test_name_rule_keeps_first_word() {
        assert_eq!(rule().normalize("Rotom Wash"), "Rotom");
        assert_eq!(rule().normalize("Pikachu"), "Pikachu");
    }

    #[test]
    fn test_name_rule_qualifier_keeps_second_word() {
        assert_eq!(rule().normalize("Mega Charizard"), "Charizard");
    }

    #[test]
    fn test_name_rule_exception_kept_whole() {
        assert_eq!(rule().normalize("Mr. Mime"), "Mr. Mime");
    }

    #[test]
    fn test_name_rule_bare_qualifier() {
        assert_eq!(rule().normalize("Mega"), "Mega");
    }

    #[test]
    fn test_name_rule_empty_name() {
        assert_eq!(rule().normalize(""), "");
    }

    #[test]
    fn test_name_rule_default_has_no_qualifier() {
        let rule = NameRule::default();
        assert_eq!(rule.normalize("Mega Charizard"), "Mega");
    }

    #[test]
    fn test_name_rule_accessors() {
        let rule = rule();
        assert_eq!(rule.qualifier(), "Mega");
        assert_eq!(rule.exceptions(), ["Mr. Mime".to_string()]);
    }

    #[test]
    fn test_collection_options_channels() {
        assert_eq!(CollectionOptions::new().channels(), 3);
        assert_eq!(CollectionOptions::new().include_alpha(true).channels(), 4);
    }

    #[test]
    fn test_load_collection_missing_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_collection(
            dir.path().join("absent.csv"),
            dir.path(),
            CollectionOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_collection_missing_images_dir() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = dir.path().join("meta.csv");
        std::fs::write(&metadata, "file,name,a\n").unwrap();
        let err = load_collection(&metadata, dir.path().join("absent"), CollectionOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
