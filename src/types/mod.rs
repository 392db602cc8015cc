// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for dingz device control.
//!
//! - [`DayPhase`] - Day/night token from the light sensor
//! - [`LedAction`] - On/Off action for the front LED

mod day_phase;
mod led;

pub use day_phase::DayPhase;
pub use led::{LedAction, LedForm};
