// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device records.
//!
//! # Types
//!
//! - [`PowerRating`] - Nominal power draw in watts
//! - [`PowerState`] - On/Off state of a device
//! - [`Icon`] - Icon identifier resolved by the rendering layer
//! - [`IconStyle`] - Solid (on) or regular (off) icon variant

mod icon;
mod power;

pub use icon::{Icon, IconStyle};
pub use power::{PowerRating, PowerState, WATTS_PER_KILOWATT};
