//! Core type definitions with validation.

use std::fmt;

use chrono::NaiveTime;
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value that must not be empty was empty.
    #[error("{field} cannot be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A numeric value that must be positive was zero.
    #[error("{field} must be positive")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The club would close before it opens.
    #[error("opening time {opens_at} is after closing time {closes_at}")]
    ClosesBeforeOpens {
        /// Declared opening time.
        opens_at: NaiveTime,
        /// Declared closing time.
        closes_at: NaiveTime,
    },
}

/// A validated client name.
///
/// Names must be non-empty. Ordering is plain lexical ordering on the
/// underlying string, which fixes the order in which remaining clients are
/// sent home at closing time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientName(String);

impl ClientName {
    /// Creates a new client name, validating it is non-empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: "client name",
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for ClientName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<ClientName> for String {
    fn from(name: ClientName) -> Self {
        name.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated table identifier.
///
/// Table ids are positive; a club with `n` tables numbers them `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(usize);

impl TableId {
    /// Creates a new table id, validating it is positive.
    pub const fn new(id: usize) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::NotPositive { field: "table id" });
        }
        Ok(Self(id))
    }

    /// Returns the raw table number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for TableId {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== ClientName Tests ==========

    #[test]
    fn client_name_accepts_non_empty() {
        let name = ClientName::new("client1").unwrap();
        assert_eq!(name.as_str(), "client1");
        assert_eq!(name.to_string(), "client1");
    }

    #[test]
    fn client_name_rejects_empty() {
        let result = ClientName::new("");
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::Empty {
                field: "client name"
            }
        ));
    }

    #[test]
    fn client_name_orders_lexically() {
        let a = ClientName::new("alice").unwrap();
        let b = ClientName::new("bob").unwrap();
        let c10 = ClientName::new("client10").unwrap();
        let c2 = ClientName::new("client2").unwrap();

        assert!(a < b);
        // Byte ordering, not numeric: "client10" sorts before "client2"
        assert!(c10 < c2);
    }

    #[test]
    fn client_name_round_trips_through_string() {
        let name = ClientName::try_from(String::from("kate")).unwrap();
        let back: String = name.into();
        assert_eq!(back, "kate");
    }

    // ========== TableId Tests ==========

    #[test]
    fn table_id_accepts_positive() {
        let table = TableId::new(3).unwrap();
        assert_eq!(table.get(), 3);
        assert_eq!(table.to_string(), "3");
    }

    #[test]
    fn table_id_rejects_zero() {
        let result = TableId::new(0);
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::NotPositive { field: "table id" }
        ));
    }

    #[test]
    fn table_id_orders_numerically() {
        let two = TableId::new(2).unwrap();
        let ten = TableId::new(10).unwrap();
        assert!(two < ten);
    }
}
