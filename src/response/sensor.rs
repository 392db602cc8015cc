// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature and light sensor responses.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::types::DayPhase;

/// Response from the temperature endpoint.
///
/// ```
/// use dingz::response::TemperatureResponse;
///
/// let body = serde_json::json!({"success": true, "temperature": 21.37});
/// let response = TemperatureResponse::from_value(body).unwrap();
/// assert!((response.temperature() - 21.37).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TemperatureResponse {
    temperature: f64,
}

impl TemperatureResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not an object, lacks
    /// `temperature`, or the field is not a number.
    pub fn from_value(body: Value) -> Result<Self, ParseError> {
        super::parse(body, &["temperature"])
    }

    /// Temperature in degrees Celsius, unrounded.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Response from the light sensor endpoint.
///
/// ```
/// use dingz::response::LightResponse;
/// use dingz::types::DayPhase;
///
/// let body = serde_json::json!({"intensity": 123.456, "state": "night"});
/// let response = LightResponse::from_value(body).unwrap();
/// assert_eq!(response.phase(), DayPhase::Night);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightResponse {
    intensity: f64,
    state: String,
}

impl LightResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not an object, lacks `intensity`
    /// or `state`, or either field has the wrong type.
    pub fn from_value(body: Value) -> Result<Self, ParseError> {
        super::parse(body, &["intensity", "state"])
    }

    /// Light intensity in lux, unrounded.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Raw day/night token.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Day/night token as a [`DayPhase`].
    #[must_use]
    pub fn phase(&self) -> DayPhase {
        DayPhase::from(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn temperature_parses_integer_reading() {
        let response = TemperatureResponse::from_value(json!({"temperature": 22})).unwrap();
        assert!((response.temperature() - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn temperature_missing_field() {
        let err = TemperatureResponse::from_value(json!({"success": true})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "temperature"));
    }

    #[test]
    fn temperature_wrong_type() {
        let err = TemperatureResponse::from_value(json!({"temperature": "warm"})).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn temperature_rejects_non_object() {
        let err = TemperatureResponse::from_value(json!("21.3")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedFormat(_)));
    }

    #[test]
    fn light_parses_fields() {
        let response =
            LightResponse::from_value(json!({"intensity": 5, "state": "day", "success": true}))
                .unwrap();
        assert!((response.intensity() - 5.0).abs() < f64::EPSILON);
        assert_eq!(response.state(), "day");
        assert!(response.phase().is_day());
    }

    #[test]
    fn light_missing_state() {
        let err = LightResponse::from_value(json!({"intensity": 5})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "state"));
    }
}
