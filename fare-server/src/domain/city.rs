//! City identifier type.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Longest accepted city token, in bytes.
const MAX_CITY_LEN: usize = 64;

/// Error returned when parsing an invalid city token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// An opaque city identifier, such as an airport code or a city name.
///
/// Cities are compared and hashed by their exact text. Beyond trimming
/// surrounding whitespace no normalisation happens, so `"lhr"` and `"LHR"`
/// are different cities. Cloning is cheap.
///
/// # Examples
///
/// ```
/// use fare_server::domain::City;
///
/// let lhr = City::parse(" LHR ").unwrap();
/// assert_eq!(lhr.as_str(), "LHR");
///
/// // Blank tokens are rejected
/// assert!(City::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct City(Arc<str>);

impl City {
    /// Parse a city token.
    ///
    /// The input is trimmed and must then be non-empty, at most 64 bytes
    /// long and free of control characters.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let s = s.trim();

        if s.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_CITY_LEN {
            return Err(InvalidCity {
                reason: "must be at most 64 bytes",
            });
        }

        if s.chars().any(char::is_control) {
            return Err(InvalidCity {
                reason: "must not contain control characters",
            });
        }

        Ok(City(Arc::from(s)))
    }

    /// Returns the city token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for City {
    type Error = InvalidCity;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        City::parse(&s)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.as_str().to_string()
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
