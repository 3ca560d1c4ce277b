use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::types::CategoryId;
use crate::forms::movies::{
    AddMovieForm, AddMovieFormPayload, UpdateMovieForm, UpdateMovieFormPayload,
};
use crate::repository::{DieselRepository, MovieListQuery};
use crate::routes::{run_blocking, service_error_response};
use crate::services::ServiceError;
use crate::services::exchange_rate::ExchangeRateService;
use crate::services::movies::{
    add_movie as add_movie_service, delete_movie as delete_movie_service,
    list_movies as list_movies_service, price_movie, price_movies,
    show_movie as show_movie_service, update_movie as update_movie_service,
};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    pub category_id: Option<i32>,
}

#[get("")]
pub async fn list_movies(
    params: web::Query<MovieListParams>,
    repo: web::Data<DieselRepository>,
    rates: web::Data<Arc<dyn ExchangeRateService>>,
) -> impl Responder {
    let mut query = MovieListQuery::default();
    if let Some(category_id) = params.category_id {
        query = match CategoryId::new(category_id) {
            Ok(category_id) => query.category(category_id),
            Err(e) => return service_error_response(ServiceError::from(e)),
        };
    }

    let repo = repo.get_ref().clone();

    let movies = match run_blocking(move || list_movies_service(query, &repo)).await {
        Ok(movies) => movies,
        Err(err) => return service_error_response(err),
    };

    match price_movies(movies, rates.get_ref().as_ref()).await {
        Ok(movies) => HttpResponse::Ok().json(movies),
        Err(err) => service_error_response(err),
    }
}

#[get("/{movie_id}")]
pub async fn show_movie(
    movie_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    rates: web::Data<Arc<dyn ExchangeRateService>>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let movie_id = movie_id.into_inner();

    let movie = match run_blocking(move || show_movie_service(movie_id, &repo)).await {
        Ok(movie) => movie,
        Err(err) => return service_error_response(err),
    };

    match price_movie(movie, rates.get_ref().as_ref()).await {
        Ok(movie) => HttpResponse::Ok().json(movie),
        Err(err) => service_error_response(err),
    }
}

#[post("")]
pub async fn add_movie(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddMovieForm>,
) -> impl Responder {
    let payload: AddMovieFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();

    match run_blocking(move || add_movie_service(payload, &repo)).await {
        Ok(movie) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/movies/{}", movie.id)))
            .json(movie),
        Err(err) => service_error_response(err),
    }
}

#[put("/{movie_id}")]
pub async fn update_movie(
    movie_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateMovieForm>,
) -> impl Responder {
    let payload: UpdateMovieFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();
    let movie_id = movie_id.into_inner();

    match run_blocking(move || update_movie_service(movie_id, payload, &repo)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[delete("/{movie_id}")]
pub async fn delete_movie(
    movie_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let movie_id = movie_id.into_inner();

    match run_blocking(move || delete_movie_service(movie_id, &repo)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
