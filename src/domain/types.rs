//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty plate numbers,
//! parseable phone numbers, non-negative money amounts) so that once a value
//! reaches the domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided monetary amount is negative or not finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Registration plate, stored trimmed and uppercased.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlateNumber(String);

impl PlateNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let normalized = value.into().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlateNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact phone number, normalized to E.164.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactPhone(String);

impl ContactPhone {
    pub fn new(value: &str) -> Result<Self, TypeConstraintError> {
        let parsed = parse(None, value).map_err(|_| TypeConstraintError::InvalidPhone)?;
        if !phonenumber::is_valid(&parsed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContactPhone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a monetary amount: finite and non-negative.
pub fn checked_amount(value: f64) -> Result<f64, TypeConstraintError> {
    if !value.is_finite() {
        return Err(TypeConstraintError::InvalidAmount(format!(
            "{value} is not a finite number"
        )));
    }
    if value < 0.0 {
        return Err(TypeConstraintError::InvalidAmount(format!(
            "{value} is negative"
        )));
    }
    Ok(value)
}

/// Strips markup from free-text notes and trims the result. Returns `None`
/// when nothing remains.
pub fn clean_notes(value: &str) -> Option<String> {
    let cleaned = ammonia::clean(value).trim().to_string();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
