//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoiError {
    #[error("CATALOG/{0}")]
    CatalogError(String),

    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("SERVER/{0}")]
    ServerError(String),

    #[error("INPUT/{0}")]
    InputError(String),

    #[error("RENDER/{0}")]
    RenderError(String),
}
