use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domaintally",
    about = "Count customers per email domain from a customers CSV export",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the customers CSV file
    #[arg(default_value = "customers.csv")]
    pub input: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
