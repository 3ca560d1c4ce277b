use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{AddCategoryFormPayload, UpdateCategoryFormPayload};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Ids that cannot exist in storage are reported as missing rather than invalid.
fn existing_category_id(id: i32) -> ServiceResult<CategoryId> {
    CategoryId::new(id).map_err(|_| ServiceError::NotFound)
}

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_category<R>(id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let id = existing_category_id(id)?;

    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a new category and return it with the identifier assigned by storage.
pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(created) => {
            log::info!(
                "Category created: {} (id: {})",
                created.name,
                created.id
            );
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite an existing category.
///
/// The path id must match the id echoed in the payload; the mismatch is
/// reported before the row is looked up.
pub fn update_category<R>(
    id: i32,
    payload: UpdateCategoryFormPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    if id != payload.id {
        return Err(ServiceError::BadRequest(format!(
            "path id {id} does not match payload id {}",
            payload.id
        )));
    }

    let id = existing_category_id(id)?;

    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_category(id, &payload.to_new_category()) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Category updated: {} (id: {id})", payload.name);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category and, with it, every movie that references it.
pub fn delete_category<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let id = existing_category_id(id)?;

    let category = match repo.get_category_by_id(id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.delete_category(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Category deleted: {} (id: {id})", category.name);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
