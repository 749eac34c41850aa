pub mod risk_analyzer;

pub use risk_analyzer::RiskAnalyzer;
