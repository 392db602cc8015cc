// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Day/night classification reported by the light sensor.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Whether the light sensor considers it day or night.
///
/// The device reports a string token; anything other than exactly `day` or
/// `night` is kept verbatim as [`DayPhase::Other`].
///
/// # Examples
///
/// ```
/// use dingz::types::DayPhase;
///
/// let phase: DayPhase = "night".parse().unwrap();
/// assert!(phase.is_night());
/// assert!(!phase.is_day());
///
/// let odd: DayPhase = "Night".parse().unwrap();
/// assert_eq!(odd, DayPhase::Other("Night".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayPhase {
    /// The sensor reports day.
    Day,
    /// The sensor reports night.
    Night,
    /// Any other token.
    Other(String),
}

impl DayPhase {
    /// Returns the token as reported by the device.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Other(token) => token,
        }
    }

    /// Returns `true` for [`DayPhase::Day`].
    #[must_use]
    pub fn is_day(&self) -> bool {
        matches!(self, Self::Day)
    }

    /// Returns `true` for [`DayPhase::Night`].
    #[must_use]
    pub fn is_night(&self) -> bool {
        matches!(self, Self::Night)
    }
}

impl fmt::Display for DayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayPhase {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for DayPhase {
    fn from(value: String) -> Self {
        match value.as_str() {
            "day" => Self::Day,
            "night" => Self::Night,
            _ => Self::Other(value),
        }
    }
}
