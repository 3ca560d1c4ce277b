use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{
    AddCategoryForm, AddCategoryFormPayload, UpdateCategoryForm, UpdateCategoryFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{run_blocking, service_error_response};
use crate::services::ServiceError;
use crate::services::categories::{
    add_category as add_category_service, delete_category as delete_category_service,
    list_categories as list_categories_service, show_category as show_category_service,
    update_category as update_category_service,
};

#[get("")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || list_categories_service(&repo)).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => service_error_response(err),
    }
}

#[get("/{category_id}")]
pub async fn show_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let category_id = category_id.into_inner();

    match run_blocking(move || show_category_service(category_id, &repo)).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response(err),
    }
}

#[post("")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();

    match run_blocking(move || add_category_service(payload, &repo)).await {
        Ok(category) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/categories/{}", category.id)))
            .json(category),
        Err(err) => service_error_response(err),
    }
}

#[put("/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCategoryForm>,
) -> impl Responder {
    let payload: UpdateCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();
    let category_id = category_id.into_inner();

    match run_blocking(move || update_category_service(category_id, payload, &repo)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[delete("/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let category_id = category_id.into_inner();

    match run_blocking(move || delete_category_service(category_id, &repo)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
