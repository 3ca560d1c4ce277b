use serde::Serialize;

use crate::domain::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            nombre: value.name.into_inner(),
            descripcion: value.description,
        }
    }
}
