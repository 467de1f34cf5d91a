// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device catalog.
//!
//! The catalog is the ordered list of appliances presented to consumers. It
//! is curated from a pool of six predefined records (see [`pool`]); the
//! default selection is TV, Laptop and Bulb, in that order.
//!
//! Consumers may flip the on/off state of catalog entries in place, but no
//! operation adds or removes entries.
//!
//! # Examples
//!
//! ```
//! use home_devices::catalog::devices;
//!
//! let mut catalog = devices();
//! assert_eq!(catalog.len(), 3);
//!
//! if let Some(bulb) = catalog.find_mut("Bulb") {
//!     bulb.set_on(true);
//! }
//! assert!((catalog.active_draw_kw() - 0.06).abs() < f64::EPSILON);
//! ```

mod records;

use std::slice;

use serde::{Deserialize, Serialize};

use crate::device::{HomeDevice, kilowatt_draw};
use crate::error::{Error, Result, ValueError};

pub use records::{bulb, fridge, laptop, microwave, pool, tv, washing_machine};

/// Ordered, fixed-size collection of device records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    devices: Vec<HomeDevice>,
}

impl Catalog {
    /// Creates the default catalog: TV, Laptop and Bulb.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Self {
            devices: vec![records::tv(), records::laptop(), records::bulb()],
        };
        tracing::debug!(count = catalog.len(), "Built default device catalog");
        catalog
    }

    /// Creates a catalog curated from the record pool by name.
    ///
    /// Devices appear in the order the names are given.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if a name matches no pool record.
    ///
    /// # Examples
    ///
    /// ```
    /// use home_devices::Catalog;
    ///
    /// let kitchen = Catalog::from_names(&["Fridge", "Microwave"]).unwrap();
    /// assert_eq!(kitchen.len(), 2);
    ///
    /// assert!(Catalog::from_names(&["Toaster"]).is_err());
    /// ```
    pub fn from_names(names: &[&str]) -> Result<Self> {
        let pool = records::pool();
        let devices = names
            .iter()
            .map(|&name| {
                pool.iter()
                    .find(|device| device.name() == name)
                    .cloned()
                    .ok_or_else(|| {
                        tracing::warn!(device = name, "Device not found in record pool");
                        Error::DeviceNotFound(name.to_string())
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = devices.len(), "Curated device catalog");
        Ok(Self { devices })
    }

    /// Loads a catalog from a JSON array of device records.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the JSON is malformed, a field is missing,
    /// an icon identifier is empty or a power rating is negative or
    /// non-finite.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(count = catalog.len(), "Loaded device catalog from JSON");
        Ok(catalog)
    }

    /// Exports the catalog as a JSON array of device records.
    ///
    /// Only catalogs that [`Catalog::from_json`] can load back are exported.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` with `ValueError::InvalidPowerRating` if a
    /// device has a negative or non-finite rating (see
    /// `PowerRating::from_watts_unchecked`), or `Error::Parse` if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        if let Some(device) = self.iter().find(|d| !d.power_rating().is_valid()) {
            tracing::warn!(device = device.name(), "Refusing to export invalid power rating");
            return Err(ValueError::InvalidPowerRating(device.power_rating().watts()).into());
        }
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the catalog holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns the devices as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[HomeDevice] {
        &self.devices
    }

    /// Returns an iterator over the devices.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, HomeDevice> {
        self.devices.iter()
    }

    /// Returns an iterator that allows changing each device's state.
    #[must_use]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, HomeDevice> {
        self.devices.iter_mut()
    }

    /// Returns the device at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HomeDevice> {
        self.devices.get(index)
    }

    /// Returns the device at `index` for in-place state changes.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut HomeDevice> {
        self.devices.get_mut(index)
    }

    /// Returns the first device named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&HomeDevice> {
        self.devices.iter().find(|device| device.name() == name)
    }

    /// Returns the first device named `name` for in-place state changes.
    #[must_use]
    pub fn find_mut(&mut self, name: &str) -> Option<&mut HomeDevice> {
        self.devices.iter_mut().find(|device| device.name() == name)
    }

    /// Returns the combined draw in kilowatts of the devices that are on.
    #[must_use]
    pub fn active_draw_kw(&self) -> f64 {
        self.devices
            .iter()
            .filter(|device| device.is_on())
            .map(kilowatt_draw)
            .sum()
    }

    /// Returns the combined rated draw in kilowatts of every device.
    #[must_use]
    pub fn total_rated_kw(&self) -> f64 {
        self.devices.iter().map(kilowatt_draw).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a HomeDevice;
    type IntoIter = slice::Iter<'a, HomeDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Catalog {
    type Item = &'a mut HomeDevice;
    type IntoIter = slice::IterMut<'a, HomeDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Returns the default device catalog.
///
/// Equivalent to [`Catalog::new`].
#[must_use]
pub fn devices() -> Catalog {
    Catalog::new()
}
