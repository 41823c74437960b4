//! Story point estimates.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// A finite story point value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryPoints(f64);

impl StoryPoints {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated point value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NonFinitePoints`] for `NaN` or infinities.
    pub const fn new(value: f64) -> Result<Self, TaskDomainError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(TaskDomainError::NonFinitePoints)
        }
    }

    /// Parses user-entered text, coercing anything that is not a finite
    /// number to zero.
    ///
    /// Blank input is zero as well.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .ok()
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self::ZERO)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StoryPoints {
    type Error = TaskDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Sum for StoryPoints {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(Self::value).sum())
    }
}

impl<'a> Sum<&'a Self> for StoryPoints {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for StoryPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
