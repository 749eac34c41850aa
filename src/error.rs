use thiserror::Error;

pub type Result<T> = std::result::Result<T, RiskError>;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Upstream request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("Insufficient data: {valid_years} valid years, {required_years} required")]
    InsufficientData {
        valid_years: usize,
        required_years: usize,
    },

    #[error("Invalid observation: {0}")]
    InvalidObservation(String),

    #[error("No historical data for location ({latitude}, {longitude})")]
    NoData { latitude: f64, longitude: f64 },

    #[error("Unexpected upstream data format: {0}")]
    UpstreamFormat(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),
}
