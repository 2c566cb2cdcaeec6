use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoemError {
    #[error("Insufficient lines for a single card: need {required} non-blank lines, got {available}")]
    InsufficientInput { available: usize, required: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl PoemError {
    /// Exit code when this error aborts a run: 2 for configuration
    /// problems, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            PoemError::InvalidConfigValueError { .. } | PoemError::MissingConfigError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PoemError>;
