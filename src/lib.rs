pub mod args;
pub mod domain;
pub mod error;
pub mod importer;
pub mod logging;
pub mod reader;
pub mod stats;

pub use args::Args;
pub use error::ImportError;
pub use importer::{import_customers, print_domain_counts};
pub use logging::setup_logging;
pub use stats::{DomainCounts, ImportReport};
