use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown database: {0}")]
    UnknownDatabase(String),

    #[error("Header mismatch for {database}: expected {expected:?}, got {actual:?}")]
    SchemaDrift {
        database: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Malformed row at line {line}: expected {expected} fields, got {actual}")]
    MalformedRow {
        line: u64,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;
