use rust_decimal::Decimal;

use crate::domain::movie::Movie;
use crate::domain::types::{CategoryId, MovieId};
use crate::dto::movies::{MovieDto, MovieReadDto};
use crate::forms::movies::{AddMovieFormPayload, UpdateMovieFormPayload};
use crate::repository::{CategoryReader, MovieListQuery, MovieReader, MovieWriter};
use crate::services::exchange_rate::ExchangeRateService;

use super::{ServiceError, ServiceResult};

fn existing_movie_id(id: i32) -> ServiceResult<MovieId> {
    MovieId::new(id).map_err(|_| ServiceError::NotFound)
}

fn find_movie<R>(id: MovieId, repo: &R) -> ServiceResult<Movie>
where
    R: MovieReader,
{
    match repo.get_movie_by_id(id) {
        Ok(Some(movie)) => Ok(movie),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get movie: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Movies must reference a stored category.
fn ensure_category_exists<R>(category_id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::BadRequest(format!(
            "category {category_id} does not exist"
        ))),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

async fn current_cop_rate<X>(rates: &X) -> ServiceResult<Decimal>
where
    X: ExchangeRateService + ?Sized,
{
    rates.get_cop_rate().await.map_err(|e| {
        log::error!("Failed to get COP exchange rate: {e}");
        ServiceError::Internal
    })
}

pub fn list_movies<R>(query: MovieListQuery, repo: &R) -> ServiceResult<Vec<Movie>>
where
    R: MovieReader,
{
    repo.list_movies(query).map_err(|e| {
        log::error!("Failed to list movies: {e}");
        ServiceError::Internal
    })
}

pub fn show_movie<R>(id: i32, repo: &R) -> ServiceResult<Movie>
where
    R: MovieReader,
{
    find_movie(existing_movie_id(id)?, repo)
}

fn priced(movie: Movie, rate: Decimal) -> ServiceResult<MovieReadDto> {
    let id = movie.id;
    MovieReadDto::new(movie, rate).ok_or_else(|| {
        log::error!("COP price of movie {id} overflows at rate {rate}");
        ServiceError::Internal
    })
}

/// Attach the COP price to a single movie.
pub async fn price_movie<X>(movie: Movie, rates: &X) -> ServiceResult<MovieReadDto>
where
    X: ExchangeRateService + ?Sized,
{
    let rate = current_cop_rate(rates).await?;
    priced(movie, rate)
}

/// Attach COP prices to a list of movies using one rate lookup.
pub async fn price_movies<X>(movies: Vec<Movie>, rates: &X) -> ServiceResult<Vec<MovieReadDto>>
where
    X: ExchangeRateService + ?Sized,
{
    if movies.is_empty() {
        return Ok(Vec::new());
    }

    let rate = current_cop_rate(rates).await?;
    movies
        .into_iter()
        .map(|movie| priced(movie, rate))
        .collect()
}

pub fn add_movie<R>(payload: AddMovieFormPayload, repo: &R) -> ServiceResult<MovieDto>
where
    R: CategoryReader + MovieWriter,
{
    ensure_category_exists(payload.movie.category_id, repo)?;

    match repo.create_movie(&payload.movie) {
        Ok(created) => {
            log::info!("Movie created: {} (id: {})", created.title, created.id);
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create movie: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace an existing movie. Id mismatch is checked first, then existence,
/// then the referenced category.
pub fn update_movie<R>(id: i32, payload: UpdateMovieFormPayload, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + MovieReader + MovieWriter,
{
    if id != payload.id {
        return Err(ServiceError::BadRequest(format!(
            "path id {id} does not match payload id {}",
            payload.id
        )));
    }

    let id = existing_movie_id(id)?;
    find_movie(id, repo)?;
    ensure_category_exists(payload.movie.category_id, repo)?;

    match repo.update_movie(id, &payload.movie) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Movie updated: {} (id: {id})", payload.movie.title);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to update movie: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_movie<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: MovieReader + MovieWriter,
{
    let id = existing_movie_id(id)?;
    let movie = find_movie(id, repo)?;

    match repo.delete_movie(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Movie deleted: {} (id: {id})", movie.title);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete movie: {e}");
            Err(ServiceError::Internal)
        }
    }
}
