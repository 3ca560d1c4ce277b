use diesel::prelude::*;

use crate::domain::movie::{Movie, NewMovie};
use crate::domain::types::MovieId;
use crate::models::movie::{Movie as DbMovie, NewMovie as DbNewMovie};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, MovieListQuery, MovieReader, MovieWriter};

impl MovieReader for DieselRepository {
    fn list_movies(&self, query: MovieListQuery) -> RepositoryResult<Vec<Movie>> {
        use crate::schema::movies;

        let mut conn = self.conn()?;

        let mut items = movies::table
            .select(DbMovie::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = query.category_id {
            items = items.filter(movies::category_id.eq(category_id.get()));
        }

        let items = items
            .order(movies::id.asc())
            .load::<DbMovie>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Movie>, _>>()?;

        Ok(items)
    }

    fn get_movie_by_id(&self, id: MovieId) -> RepositoryResult<Option<Movie>> {
        use crate::schema::movies;

        let mut conn = self.conn()?;

        let movie = movies::table
            .filter(movies::id.eq(id.get()))
            .select(DbMovie::as_select())
            .first::<DbMovie>(&mut conn)
            .optional()?;

        let movie = movie.map(TryInto::try_into).transpose()?;
        Ok(movie)
    }
}

impl MovieWriter for DieselRepository {
    fn create_movie(&self, movie: &NewMovie) -> RepositoryResult<Movie> {
        use crate::schema::movies;

        let mut conn = self.conn()?;
        let db_movie: DbNewMovie = movie.clone().into();

        let inserted = diesel::insert_into(movies::table)
            .values(db_movie)
            .returning(DbMovie::as_returning())
            .get_result::<DbMovie>(&mut conn)?;

        let movie: Movie = inserted.try_into()?;
        Ok(movie)
    }

    fn update_movie(&self, id: MovieId, movie: &NewMovie) -> RepositoryResult<usize> {
        use crate::schema::movies;

        let mut conn = self.conn()?;
        let changes: DbNewMovie = movie.clone().into();

        let affected = diesel::update(movies::table.filter(movies::id.eq(id.get())))
            .set(changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_movie(&self, id: MovieId) -> RepositoryResult<usize> {
        use crate::schema::movies;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(movies::table.filter(movies::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
