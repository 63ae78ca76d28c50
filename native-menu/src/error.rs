//! Error types for the menu core

use crate::submenu::SubmenuId;
use std::path::PathBuf;
use thiserror::Error;

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Submenu {0} doesn't exist")]
    UnknownSubmenu(SubmenuId),

    #[error("No submenu is currently open")]
    NoCurrentSubmenu,

    #[error("Back-stack is empty")]
    EmptyBackStack,

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
