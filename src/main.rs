use clap::Parser;
use ndarray::{ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use shallow_net::model::metrics;
use shallow_net::parsing::iris;
use shallow_net::{Model, NetworkConfig, NeuralNet};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path of the training dataset
    #[arg(short, long)]
    train_path: String,

    /// The path of the evaluation dataset
    /// If this parameter is not provided, the network is evaluated on the training set
    #[arg(short = 'T', long, default_value = None)]
    test_path: Option<String>,

    /// Number of feature columns in each record
    #[arg(short = 'f', long, default_value_t = iris::NUM_FEATURES)]
    num_features: usize,

    /// Number of one-hot label columns in each record
    #[arg(short = 'c', long, default_value_t = iris::NUM_CLASSES)]
    num_classes: usize,

    /// Number of neurons in the hidden layer
    #[arg(short = 'H', long, default_value_t = 3)]
    hidden_dim: usize,

    /// Number of epochs to train the network for
    #[arg(short, long, default_value_t = 5000)]
    num_epochs: usize,

    /// Learning rate of the network
    #[arg(short, long, default_value_t = 0.3)]
    learning_rate: f64,

    /// Seed for weight initialization. Unseeded runs are not reproducible
    #[arg(short, long, default_value = None)]
    seed: Option<u64>,

    /// Debug mode (save loss in a "epoch     loss" format)
    #[arg(short, long, default_value = None)]
    debug_path: Option<String>,

    /// Write one CSV record per evaluated row
    #[arg(short, long, default_value = None)]
    predictions_path: Option<String>,

    /// Log every few hundred epochs
    #[arg(short, long)]
    verbose: bool,
}

/// A single evaluated row in the predictions file
#[derive(Serialize)]
struct PredictionRecord {
    row: usize,
    predicted: usize,
    actual: usize,
    correct: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .init();
}

/// Write the losses to a debug file
fn write_losses(debug_path: &str, losses: &[(usize, f64)]) -> std::io::Result<()> {
    let mut file = File::create(debug_path)?;

    for (x, y) in losses {
        file.write_all(format!("{}    {}\n", x, y).as_bytes())?;
    }

    Ok(())
}

/// Write the per-row verdicts as CSV
fn write_predictions(
    path: &str,
    predictions: &ArrayView2<f64>,
    targets: &ArrayView2<f64>,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    for (row, (prediction, target)) in predictions
        .axis_iter(Axis(0))
        .zip(targets.axis_iter(Axis(0)))
        .enumerate()
    {
        writer.serialize(PredictionRecord {
            row,
            predicted: metrics::argmax(prediction).unwrap_or(0),
            actual: metrics::label_index(target),
            correct: metrics::is_correct(prediction, target),
        })?;
    }
    writer.flush()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = NetworkConfig::new(
        args.num_features,
        args.num_classes,
        args.hidden_dim,
        args.num_epochs,
        args.learning_rate,
    )?;

    let dataset = iris::parse_dataset_with(&args.train_path, args.num_features, args.num_classes)?;
    info!(path = %args.train_path, rows = dataset.data.nrows(), "loaded training set");

    let mut neural_net = NeuralNet::new(config);
    let losses = match args.seed {
        Some(seed) => neural_net.train_with_rng(
            &dataset.data.view(),
            &dataset.target.view(),
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => neural_net.fit(&dataset)?,
    };

    if let Some(debug_path) = &args.debug_path {
        write_losses(debug_path, &losses)?;
    }

    let evaluation = match &args.test_path {
        Some(path) => iris::parse_dataset_with(path, args.num_features, args.num_classes)?,
        None => dataset,
    };
    let predictions = neural_net.predict(&evaluation.data.view())?;

    if let Some(predictions_path) = &args.predictions_path {
        write_predictions(predictions_path, &predictions.view(), &evaluation.target.view())?;
    }

    info!(
        mae = metrics::mean_absolute_error(&predictions.view(), &evaluation.target.view()),
        "evaluation finished"
    );
    println!(
        "Accuracy = {}",
        metrics::accuracy(&predictions.view(), &evaluation.target.view())
    );

    Ok(())
}
