//! Response shapes serialized by the JSON API.

pub mod categories;
pub mod movies;
