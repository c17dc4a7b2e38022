//! Evaluation of network outputs against one-hot labels

use ndarray::{ArrayView1, ArrayView2, Axis};

/// Index of the largest entry of a row, or None for an empty row
pub fn argmax(row: ArrayView1<f64>) -> Option<usize> {
    row.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(idx, _)| idx)
}

/// Index of the first hot entry of a one-hot row. Rows without one count as class 0.
pub fn label_index(row: ArrayView1<f64>) -> usize {
    row.iter().position(|&x| x == 1f64).unwrap_or(0)
}

/// Whether the prediction at the true class equals the row's maximum prediction.
/// Ties with the maximum count as correct.
pub fn is_correct(prediction: ArrayView1<f64>, target: ArrayView1<f64>) -> bool {
    let max = prediction.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    prediction
        .get(label_index(target))
        .map_or(false, |&p| p == max)
}

/// Fraction of rows classified correctly; 0 for an empty batch
pub fn accuracy(predictions: &ArrayView2<f64>, targets: &ArrayView2<f64>) -> f64 {
    let total = predictions.nrows();
    if total == 0 {
        return 0f64;
    }

    let correct = predictions
        .axis_iter(Axis(0))
        .zip(targets.axis_iter(Axis(0)))
        .filter(|(prediction, target)| is_correct(prediction.view(), target.view()))
        .count();

    correct as f64 / total as f64
}

/// Mean of |target - prediction| over every entry
pub fn mean_absolute_error(predictions: &ArrayView2<f64>, targets: &ArrayView2<f64>) -> f64 {
    (targets - predictions).mapv(f64::abs).mean().unwrap_or(0f64)
}
