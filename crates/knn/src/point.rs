//! Labeled feature vectors.

/// Integer class label carried by every data point.
pub type Label = i64;

/// An immutable labeled feature vector.
///
/// Points in one reference set are expected to share an attribute count; the
/// loader enforces this, and a mismatch found later is reported as
/// [`KnnError::DimensionMismatch`](crate::KnnError::DimensionMismatch).
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    attributes: Box<[f64]>,
    label: Label,
}

impl DataPoint {
    /// Creates a point from its attributes and class label.
    pub fn new(attributes: impl Into<Box<[f64]>>, label: Label) -> Self {
        Self {
            attributes: attributes.into(),
            label,
        }
    }

    /// Returns the attribute vector.
    pub fn attributes(&self) -> &[f64] {
        &self.attributes
    }

    /// Returns the class label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the number of attributes.
    pub fn dim(&self) -> usize {
        self.attributes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let p = DataPoint::new(vec![1.5, -2.0, 0.0], 3);
        assert_eq!(p.attributes(), &[1.5, -2.0, 0.0]);
        assert_eq!(p.label(), 3);
        assert_eq!(p.dim(), 3);
    }

    #[test]
    fn test_from_array() {
        let p = DataPoint::new([0.0, 1.0], -1);
        assert_eq!(p.dim(), 2);
        assert_eq!(p.label(), -1);
    }
}
