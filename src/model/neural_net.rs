use ndarray::{Array2, ArrayView2, Axis};
use rand::Rng;
use tracing::{debug, info};

use super::activation::{sigmoid, sigmoid_derivative_from_output};
use super::matrix::{add_bias_row, sum_along_axis};
use super::params::ParameterSet;
use super::Model;
use crate::error::{NetError, Result};

/// How often (in epochs) the training loss is logged
const LOG_EVERY: usize = 500;

/// Hyperparams of the network. Fixed once the network is constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    input_dim: usize,
    output_dim: usize,
    hidden_dim: usize,
    num_epochs: usize,
    learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(
        input_dim: usize,
        output_dim: usize,
        hidden_dim: usize,
        num_epochs: usize,
        learning_rate: f64,
    ) -> Result<NetworkConfig> {
        if input_dim == 0 || output_dim == 0 || hidden_dim == 0 {
            return Err(NetError::InvalidConfig(format!(
                "layer sizes must be positive, got {}-{}-{}",
                input_dim, hidden_dim, output_dim
            )));
        }
        if !(learning_rate.is_finite() && learning_rate > 0f64) {
            return Err(NetError::InvalidConfig(format!(
                "learning rate must be a positive number, got {}",
                learning_rate
            )));
        }

        Ok(NetworkConfig {
            input_dim,
            output_dim,
            hidden_dim,
            num_epochs,
            learning_rate,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    pub fn hidden_dim(&self) -> usize {
        self.hidden_dim
    }

    pub fn num_epochs(&self) -> usize {
        self.num_epochs
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

/// Intermediate matrices of one forward pass
#[derive(Debug)]
pub struct ForwardPass {
    pub hidden_input: Array2<f64>,
    pub hidden_activations: Array2<f64>,
    pub output_input: Array2<f64>,
    pub output: Array2<f64>,
}

/// Represents a neural net with one sigmoid hidden layer and a sigmoid output layer
#[derive(Debug)]
pub struct NeuralNet {
    config: NetworkConfig,
    params: Option<ParameterSet>, // None until a training run completes
}

impl NeuralNet {
    /// Construct an untrained net
    pub fn new(config: NetworkConfig) -> NeuralNet {
        NeuralNet {
            config,
            params: None,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// The trained parameters, if any
    pub fn parameters(&self) -> Option<&ParameterSet> {
        self.params.as_ref()
    }

    /// Train from a fresh random initialization drawn from `rng`.
    /// Returns the mean absolute error of every epoch.
    /// On failure the previously trained parameters are left as they were.
    pub fn train_with_rng<R: Rng + ?Sized>(
        &mut self,
        inputs: &ArrayView2<f64>,
        labels: &ArrayView2<f64>,
        rng: &mut R,
    ) -> Result<Vec<(usize, f64)>> {
        self.check_inputs(inputs)?;
        self.check_labels(inputs, labels)?;

        info!(
            samples = inputs.nrows(),
            input_dim = self.config.input_dim,
            hidden_dim = self.config.hidden_dim,
            output_dim = self.config.output_dim,
            epochs = self.config.num_epochs,
            learning_rate = self.config.learning_rate,
            "training started"
        );

        let mut params = ParameterSet::random(&self.config, rng);
        let mut losses = Vec::with_capacity(self.config.num_epochs);

        for num_epoch in 0..self.config.num_epochs {
            let pass = Self::forward(inputs, &params);
            let (gradients, loss) = self.backward(inputs, labels, &params, &pass)?;
            params.apply(&gradients);

            if num_epoch % LOG_EVERY == 0 {
                debug!(epoch = num_epoch, loss, "epoch finished");
            }
            losses.push((num_epoch, loss));
        }

        if let Some((_, loss)) = losses.last() {
            info!(final_loss = *loss, "training finished");
        }
        self.params = Some(params);

        Ok(losses)
    }

    /// Perform a forward pass of the network on some input.
    /// Both the hidden activations and the output are kept for backprop.
    /// Callers check the batch against the config first.
    pub(crate) fn forward(inputs: &ArrayView2<f64>, params: &ParameterSet) -> ForwardPass {
        let hidden_input = add_bias_row(
            &inputs.dot(&params.hidden_weights).view(),
            &params.hidden_biases.view(),
        );
        let hidden_activations = hidden_input.mapv(sigmoid);

        let output_input = add_bias_row(
            &hidden_activations.dot(&params.output_weights).view(),
            &params.output_biases.view(),
        );
        let output = output_input.mapv(sigmoid);

        ForwardPass {
            hidden_input,
            hidden_activations,
            output_input,
            output,
        }
    }

    /// Calculate the learning-rate scaled parameter updates for one epoch.
    /// The updates are meant to be added to the parameters: the error is
    /// `labels - output`, so adding moves the output towards the labels.
    /// Also returns the mean absolute error of the pass.
    pub(crate) fn backward(
        &self,
        inputs: &ArrayView2<f64>,
        labels: &ArrayView2<f64>,
        params: &ParameterSet,
        pass: &ForwardPass,
    ) -> Result<(ParameterSet, f64)> {
        let learning_rate = self.config.learning_rate;

        let network_error = labels - &pass.output;
        let output_slope = pass.output.mapv(sigmoid_derivative_from_output);
        let hidden_slope = pass.hidden_activations.mapv(sigmoid_derivative_from_output);

        let d_output = &network_error * &output_slope;
        // Propagate the output error back through the output weights
        let error_at_hidden = d_output.dot(&params.output_weights.t());
        let d_hidden = &error_at_hidden * &hidden_slope;

        let output_weights = pass.hidden_activations.t().dot(&d_output) * learning_rate;
        let output_biases = sum_along_axis(&d_output.view(), Axis(0))? * learning_rate;
        let hidden_weights = inputs.t().dot(&d_hidden) * learning_rate;
        let hidden_biases = sum_along_axis(&d_hidden.view(), Axis(0))? * learning_rate;

        let loss = network_error.mapv(f64::abs).mean().unwrap_or(0f64);

        Ok((
            ParameterSet {
                hidden_weights,
                hidden_biases,
                output_weights,
                output_biases,
            },
            loss,
        ))
    }

    fn check_inputs(&self, inputs: &ArrayView2<f64>) -> Result<()> {
        if inputs.ncols() != self.config.input_dim {
            return Err(NetError::ConfigurationMismatch {
                what: "input columns",
                expected: self.config.input_dim,
                actual: inputs.ncols(),
            });
        }
        Ok(())
    }

    fn check_labels(&self, inputs: &ArrayView2<f64>, labels: &ArrayView2<f64>) -> Result<()> {
        if labels.ncols() != self.config.output_dim {
            return Err(NetError::ConfigurationMismatch {
                what: "label columns",
                expected: self.config.output_dim,
                actual: labels.ncols(),
            });
        }
        if labels.nrows() != inputs.nrows() {
            return Err(NetError::ConfigurationMismatch {
                what: "label rows",
                expected: inputs.nrows(),
                actual: labels.nrows(),
            });
        }
        Ok(())
    }
}

impl Model for NeuralNet {
    /// Train from a non-reproducible random initialization
    fn train(
        &mut self,
        inputs: &ArrayView2<f64>,
        labels: &ArrayView2<f64>,
    ) -> Result<Vec<(usize, f64)>> {
        self.train_with_rng(inputs, labels, &mut rand::thread_rng())
    }

    /// Run the trained network on a set of instances - each instance is a row in "inputs"
    fn predict(&self, inputs: &ArrayView2<f64>) -> Result<Array2<f64>> {
        let params = self.params.as_ref().ok_or(NetError::UninitializedParameters)?;
        self.check_inputs(inputs)?;

        Ok(Self::forward(inputs, params).output)
    }
}
