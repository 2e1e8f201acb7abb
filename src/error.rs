use thiserror::Error;

use crate::pipeline::error::PipelineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid file format: {0}")]
    Xml(String),

    #[error("Invalid file type. Please upload JSON or XML files only. (got {0})")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

pub type AppResult<T> = Result<T, AppError>;
