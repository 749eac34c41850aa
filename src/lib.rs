pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod providers;
pub mod utils;

pub use error::{Result, RiskError};
