// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Front LED status response.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::error::ParseError;

/// Response from the front LED status endpoint.
///
/// ```
/// use dingz::response::FrontLedResponse;
///
/// let body = serde_json::json!({"on": true, "color": "FF0000", "mode": "rgb"});
/// assert!(FrontLedResponse::from_value(body).unwrap().is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FrontLedResponse {
    #[serde(deserialize_with = "flag")]
    on: bool,
}

/// Some firmware reports `on` as `0`/`1` instead of a boolean.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(Number),
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(on) => on,
        Flag::Number(n) => n.as_f64().is_some_and(|v| v.abs() > 0.0),
    })
}

impl FrontLedResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not an object or `on` is missing
    /// or neither a boolean nor a number. A number counts as on when it is
    /// non-zero.
    pub fn from_value(body: Value) -> Result<Self, ParseError> {
        super::parse(body, &["on"])
    }

    /// Returns `true` if the LED is lit.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_off() {
        assert!(!FrontLedResponse::from_value(json!({"on": false})).unwrap().is_on());
    }

    #[test]
    fn numeric_flag() {
        assert!(FrontLedResponse::from_value(json!({"on": 1})).unwrap().is_on());
        assert!(!FrontLedResponse::from_value(json!({"on": 0})).unwrap().is_on());
    }

    #[test]
    fn string_flag_rejected() {
        let err = FrontLedResponse::from_value(json!({"on": "yes"})).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn missing_on_field() {
        let err = FrontLedResponse::from_value(json!({})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "on"));
    }
}
