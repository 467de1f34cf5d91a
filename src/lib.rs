// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home Devices - a data model for simulated household appliances.
//!
//! This library describes appliances by name, power rating, icon and on/off
//! state, and derives their power draw in kilowatts. It holds no device IO,
//! persistence or event handling: a presentation layer reads the catalog and
//! flips devices on and off.
//!
//! # Contents
//!
//! - **Device records**: [`HomeDevice`] with its [`PowerRating`] and [`Icon`]
//! - **Kilowatt draw**: [`kilowatt_draw`], the rating divided by 1000
//! - **Catalog**: the default selection of TV, Laptop and Bulb, curated from
//!   a pool of six predefined records
//!
//! # Quick Start
//!
//! ```
//! use home_devices::{Catalog, kilowatt_draw};
//!
//! let mut catalog = Catalog::new();
//!
//! for device in &catalog {
//!     println!("{} draws {} kW", device.name(), kilowatt_draw(device));
//! }
//!
//! // A UI layer switches devices on and off in place
//! if let Some(tv) = catalog.find_mut("TV") {
//!     tv.set_on(true);
//! }
//! assert!((catalog.active_draw_kw() - 0.1).abs() < f64::EPSILON);
//! ```
//!
//! ## Icons
//!
//! Each icon identifier must be available in a solid variant (device on) and
//! a regular variant (device off):
//!
//! ```
//! use home_devices::catalog;
//! use home_devices::types::IconStyle;
//!
//! let mut bulb = catalog::bulb();
//! assert_eq!(bulb.icon().as_str(), "lightbulb");
//! assert_eq!(bulb.icon_style(), IconStyle::Regular);
//!
//! bulb.toggle();
//! assert_eq!(bulb.icon_style(), IconStyle::Solid);
//! ```

pub mod catalog;
mod device;
pub mod error;
pub mod types;

pub use catalog::{Catalog, devices, pool};
pub use device::{HomeDevice, kilowatt_draw};
pub use error::{Error, ParseError, Result, ValueError};
pub use types::{Icon, IconStyle, PowerRating, PowerState};
