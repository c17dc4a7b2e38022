pub mod error;
pub mod model;
pub mod parsing;

pub use error::{NetError, Result};
pub use model::neural_net::{NetworkConfig, NeuralNet};
pub use model::params::ParameterSet;
pub use model::Model;
pub use parsing::Dataset;
