use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, TypeConstraintError, normalize_optional_text};

/// Body of `POST /api/categories`. A client-sent `id` is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(max = 500))]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub description: Option<String>,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name,
            description: self.description,
        }
    }
}

/// Body of `PUT /api/categories/{id}`; `id` must repeat the path identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(max = 500))]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    /// Identifier echoed by the client, compared against the path before lookup.
    pub id: i32,
    pub name: CategoryName,
    pub description: Option<String>,
}

impl UpdateCategoryFormPayload {
    pub fn to_new_category(&self) -> NewCategory {
        NewCategory {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category validation failed: {0}")]
    Validation(String),
    #[error("Category contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.nombre)?,
            description: normalize_optional_text(value.descripcion),
        })
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            id: value.id,
            name: CategoryName::new(value.nombre)?,
            description: normalize_optional_text(value.descripcion),
        })
    }
}
