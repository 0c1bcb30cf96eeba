//! Batches supplied by the external data source

use ndarray::Array2;

/// One batch from the data source: a fixed-size sequence of f32 tensors.
///
/// The runner never looks inside the tensors; they are handed to the
/// model as-is, in order. What each tensor means (token ids, attention
/// masks, segment ids) is a contract between the data source and the
/// model.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    tensors: Vec<Array2<f32>>,
}

impl Batch {
    /// Batch from an ordered sequence of tensors.
    #[must_use]
    pub fn new(tensors: Vec<Array2<f32>>) -> Self {
        Self { tensors }
    }

    /// The tensors, in data-source order.
    #[must_use]
    pub fn tensors(&self) -> &[Array2<f32>] {
        &self.tensors
    }

    /// Number of tensors in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}

impl From<Vec<Array2<f32>>> for Batch {
    fn from(tensors: Vec<Array2<f32>>) -> Self {
        Self::new(tensors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_batch_preserves_tensor_order() {
        let a = array![[1.0_f32, 2.0]];
        let b = array![[3.0_f32, 4.0]];
        let batch = Batch::new(vec![a.clone(), b.clone()]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.tensors()[0], a);
        assert_eq!(batch.tensors()[1], b);
    }

    #[test]
    fn test_empty_batch() {
        let batch = Batch::default();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }
}
