// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the dingz library.
//!
//! Every failure a caller can see falls in one of two groups: the request
//! could not be completed ([`ProtocolError`]), or it completed but the body
//! did not have the expected shape ([`ParseError`]).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP call failed or the device answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The device answered, but the body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device returned a non-2xx status code.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// The numeric status code.
        status: u16,
        /// Canonical reason phrase, or `Unknown`.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Host or endpoint could not be turned into a URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The client was closed; no further requests are issued.
    #[error("session is closed")]
    SessionClosed,
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing or deserialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = ProtocolError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 - Service Unavailable");
    }

    #[test]
    fn error_from_protocol_error() {
        let err: Error = ProtocolError::SessionClosed.into();
        assert!(matches!(err, Error::Protocol(ProtocolError::SessionClosed)));
        assert_eq!(err.to_string(), "protocol error: session is closed");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("temperature".to_string());
        assert_eq!(err.to_string(), "missing field in response: temperature");
    }

    #[test]
    fn error_from_parse_error() {
        let err: Error = ParseError::UnexpectedFormat("expected object".to_string()).into();
        assert!(matches!(err, Error::Parse(ParseError::UnexpectedFormat(_))));
    }
}
