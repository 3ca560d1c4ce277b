use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, MovieId, MoviePrice, MovieStatus, MovieTitle};

/// A movie listed in the catalog. Every movie belongs to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: MovieTitle,
    pub description: Option<String>,
    pub price: MoviePrice,
    pub category_id: CategoryId,
    pub status: MovieStatus,
}

/// Information required to create a new [`Movie`] or replace an existing one.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewMovie {
    pub title: MovieTitle,
    pub description: Option<String>,
    pub price: MoviePrice,
    pub category_id: CategoryId,
    pub status: MovieStatus,
}
