pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod exchange_rate;
pub mod movies;
