use ndarray::{Array2, ArrayView2, Axis};

use crate::error::{NetError, Result};

/// Build a new matrix by applying `f(row, col, value)` to every entry of `a`
pub fn apply_indexed<F>(a: &ArrayView2<f64>, f: F) -> Array2<f64>
where
    F: Fn(usize, usize, f64) -> f64,
{
    Array2::from_shape_fn(a.raw_dim(), |(row, col)| f(row, col, a[[row, col]]))
}

/// Add a 1xC bias row to every row of an NxC matrix
pub fn add_bias_row(a: &ArrayView2<f64>, bias: &ArrayView2<f64>) -> Array2<f64> {
    apply_indexed(a, |_, col, v| v + bias[[0, col]])
}

/// Sum a matrix along an axis.
/// Axis(0) sums every column across the rows and returns a 1xC row,
/// Axis(1) sums every row across the columns and returns an Rx1 column.
pub fn sum_along_axis(a: &ArrayView2<f64>, axis: Axis) -> Result<Array2<f64>> {
    match axis.index() {
        0 => Ok(a.sum_axis(Axis(0)).insert_axis(Axis(0))),
        1 => Ok(a.sum_axis(Axis(1)).insert_axis(Axis(1))),
        other => Err(NetError::InvalidAxis(other)),
    }
}
