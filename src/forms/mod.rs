//! Request payloads accepted by the JSON API and their validated forms.

pub mod categories;
pub mod movies;
