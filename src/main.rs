use anyhow::Result;
use clap::Parser;
use tracing::error;

use domaintally::{import_customers, print_domain_counts, setup_logging, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match import_customers(&args) {
        Ok(report) => {
            print_domain_counts(&report);
            Ok(())
        }
        Err(e) => {
            error!(action = "abort", component = "import", error = %e, "Import failed");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
