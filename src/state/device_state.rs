// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached device state.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::protocol::Endpoint;
use crate::types::DayPhase;

use super::StateChange;

/// Last-seen values of a dingz device.
///
/// Every field is unset until the matching refresh succeeds once, then
/// holds the most recent value. Readings are stored at full precision and
/// rounded to one decimal place when read.
///
/// # Examples
///
/// ```
/// use dingz::state::{DingzState, StateChange};
/// use dingz::types::DayPhase;
///
/// let mut state = DingzState::new();
/// assert_eq!(state.intensity(), None);
///
/// state.apply(StateChange::Light { intensity: 123.456, phase: DayPhase::Night });
/// assert_eq!(state.intensity(), Some(123.5));
/// assert!(state.is_night());
/// assert!(!state.is_day());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DingzState {
    device_details: Option<Value>,
    everything: BTreeMap<Endpoint, Value>,
    button_action: Option<Value>,
    temperature: Option<f64>,
    intensity: Option<f64>,
    day_phase: Option<DayPhase>,
}

impl DingzState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a change, overwriting the affected fields.
    pub fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::DeviceDetails(details) => self.device_details = Some(details),
            StateChange::Snapshot(entries) => self.everything.extend(entries),
            StateChange::ButtonAction(action) => self.button_action = Some(action),
            StateChange::Temperature(celsius) => self.temperature = Some(celsius),
            StateChange::Light { intensity, phase } => {
                self.intensity = Some(intensity);
                self.day_phase = Some(phase);
            }
        }
    }

    /// Device info payload.
    #[must_use]
    pub fn device_details(&self) -> Option<&Value> {
        self.device_details.as_ref()
    }

    /// Aggregate snapshot, keyed by endpoint.
    #[must_use]
    pub fn everything(&self) -> &BTreeMap<Endpoint, Value> {
        &self.everything
    }

    /// Button action payload.
    #[must_use]
    pub fn button_action(&self) -> Option<&Value> {
        self.button_action.as_ref()
    }

    /// Temperature in degrees Celsius, rounded to one decimal place.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.temperature.map(round_tenth)
    }

    /// Temperature as received from the device.
    #[must_use]
    pub fn raw_temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Light intensity in lux, rounded to one decimal place.
    #[must_use]
    pub fn intensity(&self) -> Option<f64> {
        self.intensity.map(round_tenth)
    }

    /// Light intensity as received from the device.
    #[must_use]
    pub fn raw_intensity(&self) -> Option<f64> {
        self.intensity
    }

    /// Last day/night classification.
    #[must_use]
    pub fn day_phase(&self) -> Option<&DayPhase> {
        self.day_phase.as_ref()
    }

    /// `true` if the last light reading said `day`.
    #[must_use]
    pub fn is_day(&self) -> bool {
        self.day_phase.as_ref().is_some_and(DayPhase::is_day)
    }

    /// `true` if the last light reading said `night`.
    #[must_use]
    pub fn is_night(&self) -> bool {
        self.day_phase.as_ref().is_some_and(DayPhase::is_night)
    }
}

/// Rounds to one decimal place.
///
/// Goes through decimal formatting so the exact binary value is rounded and
/// exact ties go to the even digit: `0.15` (stored just below) gives `0.1`,
/// `2.25` gives `2.2`.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
