//! Catalog loading errors
use roi_core::RoiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Duplicate product id '{0}'")]
    DuplicateProduct(String),
    #[error("Product '{id}' has a negative {field} price")]
    NegativePrice { id: String, field: &'static str },
    #[error("Catalog has no categories")]
    Empty,
}

impl From<CatalogError> for RoiError {
    fn from(err: CatalogError) -> Self {
        RoiError::CatalogError(err.to_string())
    }
}
