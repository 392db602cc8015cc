// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Front LED control.

use std::fmt;

use serde::Serialize;

/// Action sent to the front LED endpoint.
///
/// Serializes as the form body `action=on` / `action=off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedAction {
    /// Switch the LED on.
    On,
    /// Switch the LED off.
    Off,
}

impl LedAction {
    /// Returns the action token sent to the device.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Returns the form body for this action.
    #[must_use]
    pub fn form(self) -> LedForm {
        LedForm {
            action: self.as_str(),
        }
    }
}

impl fmt::Display for LedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for LedAction {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// Form body of a front LED request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedForm {
    action: &'static str,
}
