use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::neural_net::NetworkConfig;

/// The learned tensors of a single-hidden-layer network.
/// Biases are kept as 1xC rows so they broadcast over a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSet {
    pub hidden_weights: Array2<f64>, // input_dim x hidden_dim
    pub hidden_biases: Array2<f64>,  // 1 x hidden_dim
    pub output_weights: Array2<f64>, // hidden_dim x output_dim
    pub output_biases: Array2<f64>,  // 1 x output_dim
}

impl ParameterSet {
    /// Fill every tensor with independent draws from Uniform[0, 1)
    pub fn random<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> ParameterSet {
        let distribution = Uniform::new(0f64, 1f64);
        let mut sample = |shape: (usize, usize)| {
            Array2::zeros(shape).map(|_: &f64| distribution.sample(&mut *rng))
        };

        ParameterSet {
            hidden_weights: sample((config.input_dim(), config.hidden_dim())),
            hidden_biases: sample((1, config.hidden_dim())),
            output_weights: sample((config.hidden_dim(), config.output_dim())),
            output_biases: sample((1, config.output_dim())),
        }
    }

    /// Add a set of gradients to the parameters in place
    pub(crate) fn apply(&mut self, gradients: &ParameterSet) {
        self.hidden_weights += &gradients.hidden_weights;
        self.hidden_biases += &gradients.hidden_biases;
        self.output_weights += &gradients.output_weights;
        self.output_biases += &gradients.output_biases;
    }

    /// Shapes of (hidden weights, hidden biases, output weights, output biases)
    pub fn shapes(&self) -> [(usize, usize); 4] {
        [
            self.hidden_weights.dim(),
            self.hidden_biases.dim(),
            self.output_weights.dim(),
            self.output_biases.dim(),
        ]
    }
}
