// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed views over dingz JSON responses.
//!
//! Only the fields the client reads are modeled; everything else in a body
//! is ignored. Endpoints whose payload is passed through opaquely have no
//! type here and stay as `serde_json::Value`.

mod led;
mod sensor;

pub use led::FrontLedResponse;
pub use sensor::{LightResponse, TemperatureResponse};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;

/// Deserializes `body` into `T` after checking that it is an object holding
/// every field in `required`.
///
/// A missing field is reported as `ParseError::MissingField` rather than a
/// generic deserialization error.
pub(crate) fn parse<T: DeserializeOwned>(body: Value, required: &[&str]) -> Result<T, ParseError> {
    let Some(object) = body.as_object() else {
        return Err(ParseError::UnexpectedFormat(format!(
            "expected JSON object, got {body}"
        )));
    };

    if let Some(missing) = required.iter().find(|field| !object.contains_key(**field)) {
        return Err(ParseError::MissingField((*missing).to_string()));
    }

    serde_json::from_value(body).map_err(ParseError::Json)
}
