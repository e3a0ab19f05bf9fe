use crate::config::Axis;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinetuneError {
    #[error("Invalid Input: {axis} = {value} is outside [{min}, {max}]")]
    InvalidInput {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid Sweep: {0}")]
    InvalidSweep(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FtResult<T> = Result<T, FinetuneError>;
