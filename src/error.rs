//! Generator Errors
//!
//! Everything that can abort a run. Illegal commands are not errors; they
//! are skipped without emitting a line.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelError;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("cannot parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("tree model: {0}")]
    Model(#[from] ModelError),

    #[error("generator already finished")]
    AlreadyFinished,
}

impl GenError {
    pub fn config(message: impl Into<String>) -> Self {
        GenError::Config { message: message.into() }
    }
}
