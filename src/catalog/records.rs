// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Predefined appliance records.
//!
//! | Name | Rating | Icon |
//! |------|--------|------|
//! | TV | 100 W | `tv` |
//! | Fridge | 200 W | `fridge` |
//! | Laptop | 50 W | `laptop` |
//! | Microwave | 1500 W | `microwave` |
//! | Washing Machine | 1000 W | `washing-machine` |
//! | Bulb | 60 W | `lightbulb` |
//!
//! Every record starts switched off.

use crate::device::HomeDevice;
use crate::types::{Icon, PowerRating};

/// Television, 100 W.
#[must_use]
pub fn tv() -> HomeDevice {
    HomeDevice::new("TV", PowerRating::from_watts_unchecked(100.0), Icon::TV)
}

/// Fridge, 200 W.
#[must_use]
pub fn fridge() -> HomeDevice {
    HomeDevice::new("Fridge", PowerRating::from_watts_unchecked(200.0), Icon::FRIDGE)
}

/// Laptop, 50 W.
#[must_use]
pub fn laptop() -> HomeDevice {
    HomeDevice::new("Laptop", PowerRating::from_watts_unchecked(50.0), Icon::LAPTOP)
}

/// Microwave oven, 1500 W.
#[must_use]
pub fn microwave() -> HomeDevice {
    HomeDevice::new("Microwave", PowerRating::from_watts_unchecked(1500.0), Icon::MICROWAVE)
}

/// Washing machine, 1000 W.
#[must_use]
pub fn washing_machine() -> HomeDevice {
    HomeDevice::new(
        "Washing Machine",
        PowerRating::from_watts_unchecked(1000.0),
        Icon::WASHING_MACHINE,
    )
}

/// Light bulb, 60 W.
#[must_use]
pub fn bulb() -> HomeDevice {
    HomeDevice::new("Bulb", PowerRating::from_watts_unchecked(60.0), Icon::LIGHTBULB)
}

/// Returns every predefined record, in table order.
#[must_use]
pub fn pool() -> Vec<HomeDevice> {
    vec![tv(), fridge(), laptop(), microwave(), washing_machine(), bulb()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_matches_table() {
        let expected = [
            ("TV", 100.0, Icon::TV),
            ("Fridge", 200.0, Icon::FRIDGE),
            ("Laptop", 50.0, Icon::LAPTOP),
            ("Microwave", 1500.0, Icon::MICROWAVE),
            ("Washing Machine", 1000.0, Icon::WASHING_MACHINE),
            ("Bulb", 60.0, Icon::LIGHTBULB),
        ];

        let pool = pool();
        assert_eq!(pool.len(), expected.len());
        for (device, (name, watts, icon)) in pool.iter().zip(expected) {
            assert_eq!(device.name(), name);
            assert_eq!(device.power_rating(), PowerRating::new(watts).unwrap());
            assert_eq!(device.icon(), &icon);
            assert!(!device.is_on());
        }
    }

    #[test]
    fn pool_ratings_are_valid() {
        assert!(pool().iter().all(|d| d.power_rating().is_valid()));
    }
}
