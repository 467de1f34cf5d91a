// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-related types for household appliances.
//!
//! This module provides the on/off state of a device and its nominal power
//! rating in watts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Number of watts in one kilowatt.
pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Represents the on/off state of a device.
///
/// # Examples
///
/// ```
/// use home_devices::types::PowerState;
///
/// let on = PowerState::On;
/// assert_eq!(on.as_str(), "ON");
/// assert_eq!(on.toggled(), PowerState::Off);
/// assert!(bool::from(on));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` if the state is [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(state: PowerState) -> Self {
        state.is_on()
    }
}

/// Nominal power draw of a device in watts.
///
/// A valid rating is finite and non-negative. [`PowerRating::new`] enforces
/// this; [`PowerRating::from_watts_unchecked`] does not, and is meant for
/// literal data and for modelling out-of-contract values.
///
/// # Examples
///
/// ```
/// use home_devices::types::PowerRating;
///
/// let rating = PowerRating::new(1500.0).unwrap();
/// assert_eq!(rating.watts(), 1500.0);
/// assert_eq!(rating.kilowatts(), 1.5);
/// assert_eq!(rating.to_string(), "1500 W");
///
/// // Negative ratings are rejected
/// assert!(PowerRating::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PowerRating(f64);

impl PowerRating {
    /// A rating of zero watts.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated power rating.
    ///
    /// # Arguments
    ///
    /// * `watts` - The nominal power draw in watts
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidPowerRating` if `watts` is negative, NaN
    /// or infinite.
    pub fn new(watts: f64) -> Result<Self, ValueError> {
        let rating = Self(watts);
        if !rating.is_valid() {
            return Err(ValueError::InvalidPowerRating(watts));
        }
        Ok(rating)
    }

    /// Creates a power rating without any validation.
    #[must_use]
    pub const fn from_watts_unchecked(watts: f64) -> Self {
        Self(watts)
    }

    /// Returns the rating in watts.
    #[must_use]
    pub const fn watts(&self) -> f64 {
        self.0
    }

    /// Returns the rating in kilowatts.
    ///
    /// Plain division, so negative or non-finite ratings pass through.
    #[must_use]
    pub fn kilowatts(&self) -> f64 {
        self.0 / WATTS_PER_KILOWATT
    }

    /// Returns `true` if the rating is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl fmt::Display for PowerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W", self.0)
    }
}

impl TryFrom<f64> for PowerRating {
    type Error = ValueError;

    fn try_from(watts: f64) -> Result<Self, Self::Error> {
        Self::new(watts)
    }
}

impl From<PowerRating> for f64 {
    fn from(rating: PowerRating) -> Self {
        rating.0
    }
}
