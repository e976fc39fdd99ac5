use ndarray::{Array1, ArrayView2};

use crate::Result;

pub trait Predictor {
    /// Predicts one value per row of `x`.
    ///
    /// # Arguments
    /// * `x` - The input rows, one sample per row, features in training order.
    ///
    /// # Returns
    /// The predictions or an error if `x` doesn't fit the model.
    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>>;
}
