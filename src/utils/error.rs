use thiserror::Error;

/// Structural failures. Any of these aborts the run: once the document
/// shape cannot be trusted, no policy check can run against it.
/// Policy violations are never errors; they accumulate in the
/// [`ErrorLog`](crate::domain::model::ErrorLog) instead.
#[derive(Error, Debug)]
pub enum RwsError {
    #[error("There was an error when parsing the JSON;\nerror was:  {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Formatting for JSON is incorrect;\nerror was:\n{diff}")]
    JsonFormat { diff: String },

    #[error("Schema validation failed: {message}")]
    Schema { message: String },

    #[error("Public suffix list error: {message}")]
    SuffixList { message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, RwsError>;
