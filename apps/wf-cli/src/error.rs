//! Error type for the command-line front end.

use std::path::PathBuf;
use wf_core::WfError;
use wf_flow::FlowError;
use wf_fluids::FluidError;
use wf_nodal::NodalError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read case file: {path}")]
    CaseRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case file {path}: {source}")]
    CaseParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Model '{model}' needs parameter '{field}'")]
    MissingParameter { model: String, field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Flow(#[from] FlowError),

    #[error("{0}")]
    Nodal(#[from] NodalError),

    #[error("{0}")]
    Fluid(#[from] FluidError),

    #[error("{0}")]
    Core(#[from] WfError),
}

pub type CliResult<T> = Result<T, CliError>;
