//! Request interceptors wrapped around route scopes.

pub mod api_key;
