// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Icon identifiers for device presentation.
//!
//! Icons are resolved by an external rendering layer. Every identifier must
//! be available in two visual variants: a solid one shown while the device
//! is on, and a regular (outline) one shown while it is off.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Symbolic icon identifier of a device.
///
/// Any non-empty identifier known to the rendering layer is accepted. The
/// identifiers used by the predefined records are available as constants.
///
/// # Examples
///
/// ```
/// use home_devices::types::{Icon, IconStyle};
///
/// let icon: Icon = "washing-machine".parse().unwrap();
/// assert_eq!(icon, Icon::WASHING_MACHINE);
/// assert!(icon.is_predefined());
///
/// let kettle = Icon::new("mug-hot").unwrap();
/// assert!(!kettle.is_predefined());
/// assert_eq!(kettle.styled(true), ("mug-hot", IconStyle::Solid));
///
/// assert!(Icon::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Icon(Cow<'static, str>);

impl Icon {
    /// Television.
    pub const TV: Self = Self(Cow::Borrowed("tv"));
    /// Fridge.
    pub const FRIDGE: Self = Self(Cow::Borrowed("fridge"));
    /// Laptop.
    pub const LAPTOP: Self = Self(Cow::Borrowed("laptop"));
    /// Microwave oven.
    pub const MICROWAVE: Self = Self(Cow::Borrowed("microwave"));
    /// Washing machine.
    pub const WASHING_MACHINE: Self = Self(Cow::Borrowed("washing-machine"));
    /// Light bulb.
    pub const LIGHTBULB: Self = Self(Cow::Borrowed("lightbulb"));

    /// Identifiers used by the predefined records.
    pub const ALL: [Self; 6] = [
        Self::TV,
        Self::FRIDGE,
        Self::LAPTOP,
        Self::MICROWAVE,
        Self::WASHING_MACHINE,
        Self::LIGHTBULB,
    ];

    /// Creates an icon identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyIcon` if `id` is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValueError::EmptyIcon);
        }
        Ok(Self(Cow::Owned(id)))
    }

    /// Returns the identifier understood by the icon renderer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is one of [`Icon::ALL`].
    #[must_use]
    pub fn is_predefined(&self) -> bool {
        Self::ALL.contains(self)
    }

    /// Returns the identifier paired with the style matching `is_on`.
    #[must_use]
    pub fn styled(&self, is_on: bool) -> (&str, IconStyle) {
        (self.as_str(), IconStyle::for_state(is_on))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Icon {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Icon {
    type Error = ValueError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.0.into_owned()
    }
}

/// Visual variant of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconStyle {
    /// Filled variant, shown while the device is on.
    Solid,
    /// Outline variant, shown while the device is off.
    Regular,
}

impl IconStyle {
    /// Picks the style for a device's on/off state.
    #[must_use]
    pub const fn for_state(is_on: bool) -> Self {
        if is_on { Self::Solid } else { Self::Regular }
    }

    /// Returns the style name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
