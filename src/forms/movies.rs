use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::movie::NewMovie;
use crate::domain::types::{
    CategoryId, MoviePrice, MovieStatus, MovieTitle, TypeConstraintError, normalize_optional_text,
};

/// Body of `POST /api/movies`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieForm {
    #[validate(length(min = 1, max = 200))]
    pub titulo: String,
    #[validate(length(max = 1000))]
    pub descripcion: Option<String>,
    pub precio: Decimal,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub estado: String,
}

/// Body of `PUT /api/movies/{id}`; `id` must repeat the path identifier.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieForm {
    pub id: i32,
    #[validate(length(min = 1, max = 200))]
    pub titulo: String,
    #[validate(length(max = 1000))]
    pub descripcion: Option<String>,
    pub precio: Decimal,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub estado: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddMovieFormPayload {
    pub movie: NewMovie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMovieFormPayload {
    /// Identifier echoed by the client, compared against the path before lookup.
    pub id: i32,
    pub movie: NewMovie,
}

#[derive(Debug, Error)]
pub enum MovieFormError {
    #[error("Movie validation failed: {0}")]
    Validation(String),
    #[error("Movie contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for MovieFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for MovieFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn new_movie(
    titulo: String,
    descripcion: Option<String>,
    precio: Decimal,
    category_id: i32,
    estado: String,
) -> Result<NewMovie, TypeConstraintError> {
    Ok(NewMovie {
        title: MovieTitle::new(titulo)?,
        description: normalize_optional_text(descripcion),
        price: MoviePrice::new(precio)?,
        category_id: CategoryId::new(category_id)?,
        status: MovieStatus::new(estado)?,
    })
}

impl TryFrom<AddMovieForm> for AddMovieFormPayload {
    type Error = MovieFormError;

    fn try_from(value: AddMovieForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let movie = new_movie(
            value.titulo,
            value.descripcion,
            value.precio,
            value.category_id,
            value.estado,
        )?;
        Ok(Self { movie })
    }
}

impl TryFrom<UpdateMovieForm> for UpdateMovieFormPayload {
    type Error = MovieFormError;

    fn try_from(value: UpdateMovieForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let movie = new_movie(
            value.titulo,
            value.descripcion,
            value.precio,
            value.category_id,
            value.estado,
        )?;
        Ok(Self {
            id: value.id,
            movie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> AddMovieForm {
        AddMovieForm {
            titulo: "Test Movie".to_string(),
            descripcion: Some("Test Description".to_string()),
            precio: Decimal::new(105, 1),
            category_id: 1,
            estado: "Activa".to_string(),
        }
    }

    #[test]
    fn add_movie_builds_domain_movie() {
        let payload: AddMovieFormPayload = sample_form().try_into().unwrap();
        assert_eq!(payload.movie.title.as_str(), "Test Movie");
        assert_eq!(payload.movie.price.get(), Decimal::new(105, 1));
        assert_eq!(payload.movie.category_id.get(), 1);
        assert_eq!(payload.movie.status.as_str(), "Activa");
    }

    #[test]
    fn add_movie_rejects_negative_price() {
        let mut form = sample_form();
        form.precio = Decimal::new(-1, 0);

        let payload: Result<AddMovieFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(MovieFormError::TypeConstraint(_))));
    }

    #[test]
    fn add_movie_requires_category() {
        let mut form = sample_form();
        form.category_id = 0;

        let payload: Result<AddMovieFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(MovieFormError::Validation(_))));
    }

    #[test]
    fn add_movie_parses_camel_case_json() {
        let form: AddMovieForm = serde_json::from_str(
            r#"{"titulo":"Test Movie","descripcion":null,"precio":10.5,"categoryId":1,"estado":"Activa"}"#,
        )
        .unwrap();
        assert_eq!(form.category_id, 1);
        assert_eq!(form.precio, Decimal::new(105, 1));
    }

    #[test]
    fn update_movie_keeps_client_id() {
        let form = UpdateMovieForm {
            id: 3,
            titulo: "Nueva".to_string(),
            descripcion: None,
            precio: Decimal::ZERO,
            category_id: 2,
            estado: "Inactiva".to_string(),
        };

        let payload: UpdateMovieFormPayload = form.try_into().unwrap();
        assert_eq!(payload.id, 3);
        assert_eq!(payload.movie.category_id.get(), 2);
    }
}
