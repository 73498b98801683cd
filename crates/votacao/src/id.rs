//! Identifier types for the Votação application.
//!
//! The backend assigns numeric identifiers, so [`Id`] wraps an `i64` with a
//! phantom marker that keeps ids of different entities from being mixed up.
//! [`AssociadoId`] is the voter identifier typed by the user, validated for
//! shape (11 digits, CPF format) before it is ever sent over the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Number of digits in a CPF-format voter id.
pub const ASSOCIADO_ID_LEN: usize = 11;

/// A type-safe wrapper around numeric backend ids.
pub struct Id<T> {
    value: i64,
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    /// Creates an id from its raw value.
    ///
    /// # Example
    /// ```
    /// use votacao::id::PautaId;
    ///
    /// let id = PautaId::new(42);
    /// assert_eq!(id.get(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub const fn get(self) -> i64 {
        self.value
    }
}

// Manual impls so the marker type does not need to implement anything.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::new)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = ValidationError;

    /// Parses a route segment such as the `:id` in `/pautas/:id`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| ValidationError::InvalidPauta)
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PautaMarker;

/// Type alias for agenda item ids.
pub type PautaId = Id<PautaMarker>;

/// A voter id that has been checked to be exactly 11 ASCII digits.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssociadoId(String);

impl AssociadoId {
    /// Validates raw user input.
    ///
    /// Surrounding whitespace is ignored. Blank input is reported separately
    /// from malformed input so the UI can ask for the id before complaining
    /// about its shape.
    ///
    /// # Example
    /// ```
    /// use votacao::id::AssociadoId;
    ///
    /// assert!(AssociadoId::parse("12345678901").is_ok());
    /// assert!(AssociadoId::parse("1234567890").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingAssociado);
        }
        if trimmed.len() != ASSOCIADO_ID_LEN || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::MalformedAssociado);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AssociadoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssociadoId({})", self.0)
    }
}

impl AsRef<str> for AssociadoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keeps only the digits of typed input, truncated to the id length.
///
/// Applied on every keystroke so the voter id field never holds anything else.
pub fn sanitize_associado_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ASSOCIADO_ID_LEN)
        .collect()
}
