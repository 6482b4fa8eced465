//! Repository factory trait
//!
//! Repositories are built from a backend handle (a [`crate::DbClient`] for the
//! SQL ones) through a factory, so callers never name the concrete backend.

/// A trait for database repository factories
///
/// Generic over the repository type and the configuration it is built from.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance
    fn create_repository(&self, config: C) -> R;
}
