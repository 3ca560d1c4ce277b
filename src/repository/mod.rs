use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::movie::{Movie, NewMovie};
use crate::domain::types::{CategoryId, MovieId};

use self::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod movie;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing movies.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieListQuery {
    /// Restrict to movies of one category.
    pub category_id: Option<CategoryId>,
}

impl MovieListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by identifier.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities. Each call commits atomically.
pub trait CategoryWriter {
    /// Persist a new category and return it with its assigned identifier.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite name and description of an existing category.
    fn update_category(&self, id: CategoryId, category: &NewCategory) -> RepositoryResult<usize>;
    /// Delete a category together with every movie referencing it.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for movie entities.
pub trait MovieReader {
    /// List movies matching the supplied query, ordered by identifier.
    fn list_movies(&self, query: MovieListQuery) -> RepositoryResult<Vec<Movie>>;
    /// Retrieve a movie by its identifier.
    fn get_movie_by_id(&self, id: MovieId) -> RepositoryResult<Option<Movie>>;
}

/// Write operations for movie entities. Each call commits atomically.
pub trait MovieWriter {
    /// Persist a new movie and return it with its assigned identifier.
    fn create_movie(&self, movie: &NewMovie) -> RepositoryResult<Movie>;
    /// Replace every mutable field of an existing movie.
    fn update_movie(&self, id: MovieId, movie: &NewMovie) -> RepositoryResult<usize>;
    /// Delete a movie by id.
    fn delete_movie(&self, id: MovieId) -> RepositoryResult<usize>;
}
