use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("store unavailable in {operation}: {reason}")]
    StoreUnavailable {
        operation: &'static str,
        reason: String,
    },

    #[error("invalid date `{0}`, expected yyyy-MM-dd")]
    InvalidDate(String),
}

impl CatalogError {
    pub fn store_unavailable(operation: &'static str, err: impl Display) -> Self {
        CatalogError::StoreUnavailable {
            operation,
            reason: format!("{err:#}"),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
