//! PostgreSQL repository implementations

pub mod page_repo_impl;
pub mod menu_repo_impl;

pub use page_repo_impl::PgPageRepository;
pub use menu_repo_impl::PgMenuRepository;

use cms_core::DomainError;
use tracing::error;

/// Maps a sqlx error, turning unique violations into conflicts.
pub(crate) fn map_db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::Conflict(db.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}
