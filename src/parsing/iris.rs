use super::Dataset;
use crate::error::{NetError, Result};
use ndarray::Array2;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const NUM_FEATURES: usize = 4;
pub const NUM_CLASSES: usize = 3;

/// Parse an iris-style dataset: a header line, then rows of
/// <x1>,<x2>,<x3>,<x4>,<class1>,<class2>,<class3> with one-hot classes
pub fn parse_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    parse_dataset_with(path, NUM_FEATURES, NUM_CLASSES)
}

/// Parse a dataset file whose rows hold `num_features` features followed by
/// `num_classes` one-hot label columns
pub fn parse_dataset_with<P: AsRef<Path>>(
    path: P,
    num_features: usize,
    num_classes: usize,
) -> Result<Dataset> {
    let file = File::open(path)?;
    read_dataset(file, num_features, num_classes)
}

// Return matrices that represent the dataset
pub fn read_dataset<R: Read>(reader: R, num_features: usize, num_classes: usize) -> Result<Dataset> {
    let line_size = num_features + num_classes;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_len = reader.headers()?.len();
    if header_len != line_size {
        return Err(NetError::MalformedRecord {
            line: 1,
            reason: format!("expected {} fields, got {}", line_size, header_len),
        });
    }

    let mut features = Vec::new();
    let mut labels = Vec::new();
    let mut num_rows = 0;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        let values: Vec<f64> = record
            .deserialize(None)
            .map_err(|err| NetError::MalformedRecord {
                line,
                reason: err.to_string(),
            })?;

        features.extend_from_slice(&values[..num_features]);
        labels.extend_from_slice(&values[num_features..]);
        num_rows += 1;
    }

    Ok(Dataset {
        data: Array2::from_shape_vec((num_rows, num_features), features)?,
        target: Array2::from_shape_vec((num_rows, num_classes), labels)?,
    })
}
