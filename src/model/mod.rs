use ndarray::{Array2, ArrayView2};

use crate::error::Result;
use crate::parsing::Dataset;

pub mod activation;
pub mod matrix;
pub mod metrics;
pub mod neural_net;
pub mod params;

pub trait Model {
    /// Train on a batch; returns the loss of every epoch as (epoch, loss)
    fn train(&mut self, inputs: &ArrayView2<f64>, labels: &ArrayView2<f64>)
        -> Result<Vec<(usize, f64)>>;

    fn predict(&self, inputs: &ArrayView2<f64>) -> Result<Array2<f64>>;

    fn fit(&mut self, dataset: &Dataset) -> Result<Vec<(usize, f64)>> {
        self.train(&dataset.data.view(), &dataset.target.view())
    }
}
