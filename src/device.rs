// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Household appliance records.
//!
//! A [`HomeDevice`] holds the static attributes of an appliance (name, power
//! rating, icon) plus its on/off state. The on/off state is the only field
//! expected to change, and only consumers such as a UI layer change it.

use serde::{Deserialize, Serialize};

use crate::types::{Icon, IconStyle, PowerRating, PowerState};

/// A simulated household appliance.
///
/// # Examples
///
/// ```
/// use home_devices::{HomeDevice, kilowatt_draw};
/// use home_devices::types::{Icon, PowerRating};
///
/// let rating = PowerRating::new(2000.0)?;
/// let mut kettle = HomeDevice::new("Kettle", rating, Icon::new("mug-hot")?);
/// assert!(!kettle.is_on());
///
/// kettle.toggle();
/// assert!(kettle.is_on());
/// assert_eq!(kilowatt_draw(&kettle), 2.0);
/// # Ok::<(), home_devices::error::ValueError>(())
/// ```
///
/// Only the on/off state can change after construction:
///
/// ```compile_fail
/// let mut tv = home_devices::catalog::tv();
/// tv.name = String::from("Radio");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDevice {
    /// Nominal power draw in watts.
    power_rating: PowerRating,
    /// Human-readable label, unique within a catalog by convention.
    name: String,
    /// Icon identifier resolved by the rendering layer.
    icon: Icon,
    /// `true` if the device is currently on.
    is_on: bool,
}

impl HomeDevice {
    /// Creates a device that is initially off.
    #[must_use]
    pub fn new(name: impl Into<String>, power_rating: PowerRating, icon: Icon) -> Self {
        Self {
            power_rating,
            name: name.into(),
            icon,
            is_on: false,
        }
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal power rating.
    #[must_use]
    pub const fn power_rating(&self) -> PowerRating {
        self.power_rating
    }

    /// Returns the icon identifier.
    #[must_use]
    pub const fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Returns `true` if the device is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the on/off state as a [`PowerState`].
    #[must_use]
    pub fn power_state(&self) -> PowerState {
        PowerState::from(self.is_on)
    }

    /// Returns the icon variant matching the current on/off state.
    #[must_use]
    pub const fn icon_style(&self) -> IconStyle {
        IconStyle::for_state(self.is_on)
    }

    /// Switches the device on or off.
    pub fn set_on(&mut self, is_on: bool) {
        if self.is_on != is_on {
            tracing::trace!(device = %self.name, is_on, "Device state changed");
        }
        self.is_on = is_on;
    }

    /// Flips the on/off state.
    pub fn toggle(&mut self) {
        self.set_on(!self.is_on);
    }

    /// Returns the power draw in kilowatts at the rated power.
    ///
    /// See [`kilowatt_draw`].
    #[must_use]
    pub fn kilowatt_draw(&self) -> f64 {
        kilowatt_draw(self)
    }
}

/// Returns the instantaneous draw of `device` in kilowatts, assuming it runs
/// at its rated power.
///
/// This is a plain division by 1000. The rating is not validated, so a
/// negative or non-finite rating yields a negative or non-finite result.
/// The on/off state is ignored.
#[must_use]
pub fn kilowatt_draw(device: &HomeDevice) -> f64 {
    device.power_rating.kilowatts()
}
