// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the home devices library.
//!
//! The predefined catalog and the kilowatt conversion never fail. Errors only
//! arise when values are validated, when a catalog is curated by name, or
//! when a catalog is loaded from JSON.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing catalog data.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// No device with the given name exists in the record pool.
    #[error("device not found: {0}")]
    DeviceNotFound(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A power rating is negative or not a finite number.
    #[error("invalid power rating: {0} W (must be finite and non-negative)")]
    InvalidPowerRating(f64),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An icon identifier is empty.
    #[error("icon identifier must not be empty")]
    EmptyIcon,
}

/// Errors related to parsing catalog data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(ParseError::Json(err))
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidPowerRating(-5.0);
        assert_eq!(
            err.to_string(),
            "invalid power rating: -5 W (must be finite and non-negative)"
        );
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::EmptyIcon.into();
        assert!(matches!(err, Error::Value(ValueError::EmptyIcon)));
        assert_eq!(err.to_string(), "value error: icon identifier must not be empty");
    }

    #[test]
    fn error_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn device_not_found_display() {
        let err = Error::DeviceNotFound("Toaster".to_string());
        assert_eq!(err.to_string(), "device not found: Toaster");
    }
}
