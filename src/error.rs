use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("the file {path:?} does not have the extension .csv")]
    InvalidExtension { path: PathBuf },

    #[error("failed to open file: {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read record")]
    Read {
        #[from]
        source: csv::Error,
    },

    #[error("record on line {line} has only {fields} fields, missing the email field")]
    MissingEmailField { line: u64, fields: usize },

    #[error("email without @: {email}")]
    MalformedEmail { email: String },
}
