use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Catalog category grouping movies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
}

/// Data required to insert or overwrite a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
}
