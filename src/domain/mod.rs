//! Domain entities and value objects independent of storage and transport.

pub mod category;
pub mod movie;
pub mod types;
