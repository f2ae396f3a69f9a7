use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetError {
    #[error("determinant requires a square matrix: got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DetResult<T> = Result<T, DetError>;
