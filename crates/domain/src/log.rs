//! Log categories understood by the event log.

use std::fmt;
use std::str::FromStr;


/// Category of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// Name of a positive test, logged before it runs.
    Title,
    /// Name of a negative test, logged before it runs.
    ErrorTitle,
    /// Query about to be sent.
    Request,
    /// Payload received on the success path.
    Response,
    /// Message and payload received on the failure path.
    ErrorResponse,
    /// A whole run matched.
    Successful,
    /// A run stopped on a mismatch or configuration error.
    Failure,
}

impl LogCategory {
    /// All categories.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::ErrorTitle,
        Self::Request,
        Self::Response,
        Self::ErrorResponse,
        Self::Successful,
        Self::Failure,
    ];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "test title",
            Self::ErrorTitle => "test error title",
            Self::Request => "test request",
            Self::Response => "test response",
            Self::ErrorResponse => "test error response",
            Self::Successful => "test successful",
            Self::Failure => "test failure",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for LogCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for category in LogCategory::ALL {
            assert_eq!(category.as_str().parse::<LogCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "debug".parse::<LogCategory>(),
            Err(UnknownCategory("debug".to_string()))
        );
    }
}
