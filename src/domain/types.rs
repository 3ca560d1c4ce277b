//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and prices are validated at the boundary.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A stored decimal could not be parsed.
    #[error("{0} is not a valid decimal number")]
    InvalidDecimal(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional free-text value, mapping blank input to `None`.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a category.", "category_id");
id_newtype!(MovieId, "Unique identifier for a movie.", "movie_id");

non_empty_string_newtype!(CategoryName, "Display name of a category.", "nombre");
non_empty_string_newtype!(MovieTitle, "Title of a movie.", "titulo");
non_empty_string_newtype!(
    MovieStatus,
    "Free-text availability label of a movie, e.g. `Activa`.",
    "estado"
);

/// Exact decimal price of a movie, never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MoviePrice(Decimal);

impl MoviePrice {
    /// Constructs a price that is zero or greater.
    pub fn new(value: Decimal) -> Result<Self, TypeConstraintError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(TypeConstraintError::NegativeNumber("precio"))
        } else {
            Ok(Self(value.normalize()))
        }
    }

    /// Returns the raw decimal value.
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Price converted with the given multiplier, without rounding.
    /// `None` when the product does not fit in a `Decimal`.
    pub fn convert(self, rate: Decimal) -> Option<Decimal> {
        self.0.checked_mul(rate)
    }
}

impl Display for MoviePrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MoviePrice {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s.trim()).map_err(|_| TypeConstraintError::InvalidDecimal("precio"))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for MoviePrice {
    type Error = TypeConstraintError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoviePrice> for Decimal {
    fn from(value: MoviePrice) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_category_names() {
        let value = CategoryName::new("  Drama  ").unwrap();
        assert_eq!(value.as_str(), "Drama");
    }

    #[test]
    fn rejects_blank_titles() {
        let err = MovieTitle::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("titulo"));
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = MovieId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("movie_id"));
    }

    #[test]
    fn movie_price_allows_zero() {
        assert_eq!(MoviePrice::new(Decimal::ZERO).unwrap().get(), Decimal::ZERO);
    }

    #[test]
    fn movie_price_rejects_negative_numbers() {
        assert_eq!(
            MoviePrice::new(Decimal::new(-1, 2)).unwrap_err(),
            TypeConstraintError::NegativeNumber("precio")
        );
    }

    #[test]
    fn movie_price_parses_stored_text() {
        let price: MoviePrice = "10.50".parse().unwrap();
        assert_eq!(price.get(), Decimal::new(105, 1));
        assert_eq!(price.to_string(), "10.5");
        assert_eq!(
            "ten".parse::<MoviePrice>().unwrap_err(),
            TypeConstraintError::InvalidDecimal("precio")
        );
    }

    #[test]
    fn converts_price_without_rounding() {
        let price = MoviePrice::new(Decimal::new(105, 1)).unwrap();
        let rate = Decimal::new(39125075, 4);
        assert_eq!(price.convert(rate), Some(Decimal::new(4108132875, 5)));
    }

    #[test]
    fn conversion_overflow_is_reported() {
        let price = MoviePrice::new(Decimal::MAX).unwrap();
        assert_eq!(price.convert(Decimal::new(4000, 0)), None);
    }

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(normalize_optional_text(Some("   ".into())), None);
        assert_eq!(
            normalize_optional_text(Some(" thriller ".into())),
            Some("thriller".to_string())
        );
    }
}
