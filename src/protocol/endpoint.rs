// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint table for the dingz REST API.

use std::fmt;

/// A logical endpoint of the dingz API.
///
/// Each endpoint maps to a fixed path relative to the API root
/// ([`Endpoint::API_ROOT`]).
///
/// # Examples
///
/// ```
/// use dingz::protocol::Endpoint;
///
/// assert_eq!(Endpoint::Light.path(), "light");
/// assert_eq!(Endpoint::FrontLedSet.path(), "led/set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    /// Status of the puck (the power module behind the switch).
    Puck,
    /// Device identity and firmware information.
    DeviceInfo,
    /// General device settings.
    Settings,
    /// Motion sensor configuration.
    PirConfiguration,
    /// Thermostat configuration.
    ThermostatConfiguration,
    /// Input configuration.
    InputConfiguration,
    /// Configured button actions.
    ButtonActions,
    /// Ambient temperature reading.
    Temperature,
    /// Light sensor reading.
    Light,
    /// Front LED status.
    FrontLedGet,
    /// Front LED control.
    FrontLedSet,
}

impl Endpoint {
    /// Path of the API root, resolved against the device origin.
    pub const API_ROOT: &'static str = "/api/v1/";

    /// Endpoints queried, in order, by the aggregate snapshot refresh.
    pub const SNAPSHOT: [Self; 7] = [
        Self::Puck,
        Self::DeviceInfo,
        Self::Settings,
        Self::PirConfiguration,
        Self::ThermostatConfiguration,
        Self::InputConfiguration,
        Self::ButtonActions,
    ];

    /// Returns the path of this endpoint relative to [`Self::API_ROOT`].
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Puck => "puck",
            Self::DeviceInfo => "device",
            Self::Settings => "settings",
            Self::PirConfiguration => "pir_config",
            Self::ThermostatConfiguration => "thermostat_config",
            Self::InputConfiguration => "input_config",
            Self::ButtonActions => "action",
            Self::Temperature => "temp",
            Self::Light => "light",
            Self::FrontLedGet => "led/get",
            Self::FrontLedSet => "led/set",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn snapshot_covers_seven_distinct_endpoints() {
        let unique: HashSet<_> = Endpoint::SNAPSHOT.iter().map(|e| e.path()).collect();
        assert_eq!(unique.len(), 7);
        assert_eq!(Endpoint::SNAPSHOT[0], Endpoint::Puck);
        assert_eq!(Endpoint::SNAPSHOT[6], Endpoint::ButtonActions);
    }

    #[test]
    fn paths_are_relative() {
        for endpoint in Endpoint::SNAPSHOT {
            assert!(!endpoint.path().starts_with('/'), "{endpoint}");
        }
        assert!(!Endpoint::FrontLedGet.path().starts_with('/'));
    }

    #[test]
    fn display_uses_path() {
        assert_eq!(Endpoint::Temperature.to_string(), "temp");
        assert_eq!(Endpoint::PirConfiguration.to_string(), "pir_config");
    }
}
