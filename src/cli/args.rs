use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weather-odds")]
#[command(about = "Historical bad-weather odds for outdoor activities")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess bad-day odds for a location and calendar day
    Assess {
        #[arg(long, allow_hyphen_values = true, help = "Latitude in decimal degrees")]
        lat: f64,

        #[arg(long, allow_hyphen_values = true, help = "Longitude in decimal degrees")]
        lon: f64,

        #[arg(short, long, help = "Target date, YYYY-MM-DD")]
        date: String,

        #[arg(short, long, help = "Single activity [default: all registered]")]
        activity: Option<String>,

        #[arg(long, default_value = "false", help = "Use the seeded synthetic provider")]
        synthetic: bool,

        #[arg(long, default_value = "20", help = "Minimum valid years before a result is trusted")]
        min_years: usize,

        #[arg(long, default_value = "0", help = "Raw observations to echo back (0 = none)")]
        sample: usize,
    },

    /// List registered activities and their threshold rules
    Activities,
}
