//! Dense row-major containers for decoded pixel data and label vectors.
//!
//! Both containers hold a flat buffer plus an explicit shape, suitable
//! for direct transfer to ML frameworks without a layout conversion.

use crate::error::{Error, Result};

/// A dense stack of fixed-size images.
///
/// Data is stored in row-major (C-style) order with shape
/// `[len, height, width, channels]` and unsigned 8-bit intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTensor {
    /// The underlying pixel buffer
    data: Vec<u8>,
    /// Shape of the tensor [len, height, width, channels]
    shape: [usize; 4],
}

impl ImageTensor {
    /// Creates a zero-filled tensor with the given shape.
    #[must_use]
    pub fn new(len: usize, height: usize, width: usize, channels: usize) -> Self {
        Self {
            data: vec![0; len * height * width * channels],
            shape: [len, height, width, channels],
        }
    }

    /// Creates a tensor from existing data and shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length doesn't match the shape product.
    pub fn from_vec(data: Vec<u8>, shape: [usize; 4]) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::shape_mismatch(format!(
                "Data length {} doesn't match shape {:?}",
                data.len(),
                shape
            )));
        }
        Ok(Self { data, shape })
    }

    /// Returns the shape as [len, height, width, channels].
    #[must_use]
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Returns true if the tensor holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape[0] == 0
    }

    /// Returns the number of channels per pixel.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.shape[3]
    }

    /// Returns the pixel slab of one image in height-width-channel order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&[u8]> {
        if index >= self.shape[0] {
            return None;
        }
        let stride = self.shape[1] * self.shape[2] * self.shape[3];
        Some(&self.data[index * stride..(index + 1) * stride])
    }

    /// Returns one pixel as a channel slice.
    ///
    /// Returns `None` if any index is out of bounds.
    #[must_use]
    pub fn pixel(&self, index: usize, y: usize, x: usize) -> Option<&[u8]> {
        let [len, height, width, channels] = self.shape;
        if index >= len || y >= height || x >= width {
            return None;
        }
        let offset = ((index * height + y) * width + x) * channels;
        Some(&self.data[offset..offset + channels])
    }

    /// Returns the underlying buffer as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the underlying buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the tensor and returns the underlying buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// A dense 2-D matrix of label values.
///
/// Data is stored in row-major order with shape `[rows, cols]`; each row
/// is one sample's one-hot or multi-hot category vector.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMatrix {
    /// The underlying data buffer
    data: Vec<f32>,
    /// Shape of the matrix [rows, cols]
    shape: [usize; 2],
}

impl LabelMatrix {
    /// Creates a zero-filled matrix with the given shape.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            shape: [rows, cols],
        }
    }

    /// Creates a matrix from existing data and shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length doesn't match rows * cols.
    pub fn from_vec(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::shape_mismatch(format!(
                "Data length {} doesn't match shape [{}, {}]",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            data,
            shape: [rows, cols],
        })
    }

    /// Returns the shape as [rows, cols].
    #[must_use]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Returns true if the matrix holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape[0] == 0
    }

    /// Returns one row as a slice.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.shape[0] {
            return None;
        }
        Some(&self.data[index * self.shape[1]..(index + 1) * self.shape[1]])
    }

    /// Gets an element at the given row and column.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&f32> {
        if row < self.shape[0] && col < self.shape[1] {
            Some(&self.data[row * self.shape[1] + col])
        } else {
            None
        }
    }

    /// Sets an element at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.shape[0] && col < self.shape[1]);
        self.data[row * self.shape[1] + col] = value;
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the matrix and returns the underlying data.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tensor_new() {
        let tensor = ImageTensor::new(2, 4, 4, 3);
        assert_eq!(tensor.shape(), [2, 4, 4, 3]);
        assert_eq!(tensor.len(), 2);
        assert_eq!(tensor.channels(), 3);
        assert_eq!(tensor.as_slice().len(), 2 * 4 * 4 * 3);
    }

    #[test]
    fn test_image_tensor_from_vec_shape_check() {
        let err = ImageTensor::from_vec(vec![0; 10], [1, 2, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));

        let ok = ImageTensor::from_vec(vec![0; 12], [1, 2, 2, 3]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_image_tensor_image_slab() {
        let mut tensor = ImageTensor::new(2, 2, 2, 1);
        tensor.as_mut_slice()[4] = 7;
        let second = tensor.image(1).unwrap();
        assert_eq!(second, &[7, 0, 0, 0]);
        assert!(tensor.image(2).is_none());
    }

    #[test]
    fn test_image_tensor_pixel() {
        let data: Vec<u8> = (0..12).collect();
        let tensor = ImageTensor::from_vec(data, [1, 2, 2, 3]).unwrap();
        assert_eq!(tensor.pixel(0, 1, 0).unwrap(), &[6, 7, 8]);
        assert!(tensor.pixel(0, 2, 0).is_none());
        assert!(tensor.pixel(1, 0, 0).is_none());
    }

    #[test]
    fn test_image_tensor_empty() {
        let tensor = ImageTensor::new(0, 256, 256, 3);
        assert!(tensor.is_empty());
        assert!(tensor.image(0).is_none());
    }

    #[test]
    fn test_image_tensor_into_vec() {
        let tensor = ImageTensor::from_vec(vec![1, 2, 3], [1, 1, 1, 3]).unwrap();
        assert_eq!(tensor.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_label_matrix_new() {
        let matrix = LabelMatrix::new(3, 18);
        assert_eq!(matrix.shape(), [3, 18]);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 18);
        assert!(!matrix.is_empty());
    }

    #[test]
    fn test_label_matrix_from_vec_shape_check() {
        let err = LabelMatrix::from_vec(vec![0.0; 5], 2, 3).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_label_matrix_get_set() {
        let mut matrix = LabelMatrix::new(2, 3);
        matrix.set(1, 2, 1.0);
        assert_eq!(matrix.get(1, 2), Some(&1.0));
        assert_eq!(matrix.get(0, 0), Some(&0.0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }

    #[test]
    fn test_label_matrix_row() {
        let matrix = LabelMatrix::from_vec(vec![1.0, 0.0, 0.0, 1.0], 2, 2).unwrap();
        assert_eq!(matrix.row(0).unwrap(), &[1.0, 0.0]);
        assert_eq!(matrix.row(1).unwrap(), &[0.0, 1.0]);
        assert!(matrix.row(2).is_none());
    }

    #[test]
    fn test_label_matrix_into_vec() {
        let matrix = LabelMatrix::from_vec(vec![1.0, 2.0], 1, 2).unwrap();
        assert_eq!(matrix.into_vec(), vec![1.0, 2.0]);
    }
}
