use diesel::prelude::*;

use crate::domain::movie::{Movie as DomainMovie, NewMovie as DomainNewMovie};
use crate::domain::types::{MovieStatus, MovieTitle, TypeConstraintError};

/// Diesel model representing the `movies` table.
///
/// Prices are kept as canonical decimal text so no precision is lost in SQLite.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::movies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Movie {
    pub id: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub precio: String,
    pub category_id: i32,
    pub estado: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::movies)]
#[diesel(treat_none_as_null = true)]
pub struct NewMovie {
    pub titulo: String,
    pub descripcion: Option<String>,
    pub precio: String,
    pub category_id: i32,
    pub estado: String,
}

impl TryFrom<Movie> for DomainMovie {
    type Error = TypeConstraintError;

    fn try_from(movie: Movie) -> Result<Self, Self::Error> {
        Ok(Self {
            id: movie.id.try_into()?,
            title: MovieTitle::new(movie.titulo)?,
            description: movie.descripcion,
            price: movie.precio.parse()?,
            category_id: movie.category_id.try_into()?,
            status: MovieStatus::new(movie.estado)?,
        })
    }
}

impl From<DomainNewMovie> for NewMovie {
    fn from(movie: DomainNewMovie) -> Self {
        Self {
            titulo: movie.title.into_inner(),
            descripcion: movie.description,
            precio: movie.price.to_string(),
            category_id: movie.category_id.get(),
            estado: movie.status.into_inner(),
        }
    }
}
