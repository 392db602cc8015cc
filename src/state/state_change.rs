// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Each successful refresh produces exactly one [`StateChange`], which is
//! then applied to the cached [`DingzState`](super::DingzState).

use serde_json::Value;

use crate::protocol::Endpoint;
use crate::types::DayPhase;

/// A change to the cached device state.
///
/// # Examples
///
/// ```
/// use dingz::state::{DingzState, StateChange};
///
/// let mut state = DingzState::new();
/// state.apply(StateChange::Temperature(21.37));
/// assert_eq!(state.temperature(), Some(21.4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// Device info payload replaced.
    DeviceDetails(Value),

    /// Aggregate snapshot: one payload per endpoint.
    Snapshot(Vec<(Endpoint, Value)>),

    /// Button action payload replaced.
    ButtonAction(Value),

    /// New temperature reading in degrees Celsius.
    Temperature(f64),

    /// New light sensor reading.
    Light {
        /// Intensity in lux.
        intensity: f64,
        /// Day/night classification.
        phase: DayPhase,
    },
}
