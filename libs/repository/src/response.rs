use catalog::{CatalogError, CatalogResult};

use crate::RepositoryError;

pub(crate) type Response<T> = Result<T, RepositoryError>;

/// Converts backend failures at the store boundary.
pub(crate) trait IntoCatalogResult<T> {
    fn into_catalog(self, operation: &'static str) -> CatalogResult<T>;
}

impl<T> IntoCatalogResult<T> for Result<T, sea_orm::DbErr> {
    fn into_catalog(self, operation: &'static str) -> CatalogResult<T> {
        self.map_err(|e| CatalogError::store_unavailable(operation, e))
    }
}

impl<T> IntoCatalogResult<T> for redis::RedisResult<T> {
    fn into_catalog(self, operation: &'static str) -> CatalogResult<T> {
        self.map_err(|e| CatalogError::store_unavailable(operation, e))
    }
}
