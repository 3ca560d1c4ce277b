use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::movie::Movie;

/// Movie as stored, returned by `POST /api/movies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub precio: Decimal,
    pub category_id: i32,
    pub estado: String,
}

impl From<Movie> for MovieDto {
    fn from(value: Movie) -> Self {
        Self {
            id: value.id.get(),
            titulo: value.title.into_inner(),
            descripcion: value.description,
            precio: value.price.get(),
            category_id: value.category_id.get(),
            estado: value.status.into_inner(),
        }
    }
}

/// Movie enriched with its price in Colombian pesos.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieReadDto {
    pub id: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub precio: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub precio_cop: Decimal,
    pub category_id: i32,
    pub estado: String,
}

impl MovieReadDto {
    /// Map a movie, pricing it with `cop_rate` units of COP per base unit.
    /// Returns `None` if the COP price overflows.
    pub fn new(movie: Movie, cop_rate: Decimal) -> Option<Self> {
        let precio_cop = movie.price.convert(cop_rate)?;
        Some(Self {
            precio_cop,
            id: movie.id.get(),
            titulo: movie.title.into_inner(),
            descripcion: movie.description,
            precio: movie.price.get(),
            category_id: movie.category_id.get(),
            estado: movie.status.into_inner(),
        })
    }
}
