use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::CatalogError;

/// Fatal shell errors. Anything here ends the session.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
