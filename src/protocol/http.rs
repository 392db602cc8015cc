// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for dingz devices.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{Endpoint, Session};

// ============================================================================
// HttpConfig - Connection parameters for a single device
// ============================================================================

/// Configuration for a dingz device.
///
/// # Examples
///
/// ```
/// use dingz::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.42")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(
///     config.base_url().unwrap().as_str(),
///     "http://192.168.1.42:8080/api/v1/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
    session: Option<Client>,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device, optionally with
    ///   a `:port` suffix
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
            session: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout used when the client builds its own session.
    ///
    /// A shared session keeps whatever timeout it was built with.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a caller-owned HTTP client instead of building one.
    ///
    /// The caller keeps ownership: closing the device client leaves this
    /// `Client` usable.
    #[must_use]
    pub fn with_session(mut self, client: Client) -> Self {
        self.session = Some(client);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `true` if a caller-owned session was supplied.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Builds the API root URL, e.g. `http://192.168.1.42/api/v1/`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host does not form a
    /// valid URL.
    pub fn base_url(&self) -> Result<Url, ProtocolError> {
        let origin = if self.port == Self::DEFAULT_PORT {
            format!("http://{}/", self.host)
        } else {
            format!("http://{}:{}/", self.host, self.port)
        };

        let origin = Url::parse(&origin)
            .map_err(|e| ProtocolError::InvalidAddress(format!("{}: {e}", self.host)))?;
        resolve(&origin, Endpoint::API_ROOT)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// No network access happens here; an owned session is built on the
    /// first request.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL cannot be built.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let base_url = self.base_url()?;
        let session = match self.session {
            Some(client) => Session::shared(client),
            None => Session::owned(self.timeout),
        };
        let session = Arc::new(session);

        Ok(HttpClient {
            host: self.host,
            base_url,
            session,
        })
    }
}

/// Resolves `relative` against `base` as a relative URL reference.
///
/// A plain segment replaces everything after the base's last `/`; a path
/// starting with `/` replaces the whole path.
///
/// # Examples
///
/// ```
/// use dingz::protocol::resolve;
/// use url::Url;
///
/// let base = Url::parse("http://1.2.3.4/api/v1/").unwrap();
/// assert_eq!(resolve(&base, "light").unwrap().as_str(), "http://1.2.3.4/api/v1/light");
/// assert_eq!(resolve(&base, "/light").unwrap().as_str(), "http://1.2.3.4/light");
/// ```
///
/// # Errors
///
/// Returns `ProtocolError::InvalidAddress` if the reference cannot be resolved.
pub fn resolve(base: &Url, relative: &str) -> Result<Url, ProtocolError> {
    base.join(relative)
        .map_err(|e| ProtocolError::InvalidAddress(format!("{relative}: {e}")))
}

// ============================================================================
// HttpClient - Shared call helper
// ============================================================================

/// HTTP client bound to one dingz device.
///
/// Every call is a single attempt: no retries, and the only timeout is the
/// one configured on the session.
#[derive(Debug)]
pub struct HttpClient {
    host: String,
    base_url: Url,
    session: Arc<Session>,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL cannot be built.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the configured host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the API root URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the session backing this client.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Builds the full URL of an endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the path cannot be joined.
    pub fn url_for(&self, endpoint: Endpoint) -> Result<Url, ProtocolError> {
        resolve(&self.base_url, endpoint.path())
    }

    /// Sends a GET request to an endpoint.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get(&self, endpoint: Endpoint) -> Result<Value, Error> {
        let url = self.url_for(endpoint)?;
        self.call::<()>(url, Method::GET, None).await
    }

    /// Sends a POST request with a form-encoded body to an endpoint.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        form: &T,
    ) -> Result<Value, Error> {
        let url = self.url_for(endpoint)?;
        self.call(url, Method::POST, Some(form)).await
    }

    /// Performs one request and returns the body.
    ///
    /// JSON bodies (by `Content-Type`) are parsed; anything else is returned
    /// as a JSON string holding the raw text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the session is closed, the request fails,
    /// or the status is not 2xx. Returns `Error::Parse` if a JSON body is
    /// malformed.
    pub async fn call<T: Serialize + ?Sized>(
        &self,
        url: Url,
        method: Method,
        form: Option<&T>,
    ) -> Result<Value, Error> {
        let client = self.session.client()?;

        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        let mut request = client.request(method.clone(), url.clone());
        if let Some(form) = form {
            request = request.form(form);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "HTTP request failed");
            self.transport_error(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method = %method, url = %url, status = status.as_u16(), "HTTP request rejected");
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        if is_json {
            serde_json::from_str(&body).map_err(|e| ParseError::Json(e).into())
        } else {
            Ok(Value::String(body))
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout() {
            let timeout = u64::try_from(self.session.timeout().as_millis()).unwrap_or(u64::MAX);
            ProtocolError::Timeout(timeout)
        } else {
            ProtocolError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.host(), "192.168.1.42");
        assert_eq!(config.port(), 80);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.has_session());
    }

    #[test]
    fn http_config_base_url() {
        let config = HttpConfig::new("1.2.3.4");
        assert_eq!(config.base_url().unwrap().as_str(), "http://1.2.3.4/api/v1/");
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("1.2.3.4").with_port(8080);
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://1.2.3.4:8080/api/v1/"
        );
    }

    #[test]
    fn http_config_base_url_host_with_port() {
        let config = HttpConfig::new("127.0.0.1:5000");
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://127.0.0.1:5000/api/v1/"
        );
    }

    #[test]
    fn http_config_invalid_host() {
        let config = HttpConfig::new("not a host");
        assert!(matches!(
            config.base_url(),
            Err(ProtocolError::InvalidAddress(_))
        ));
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("dingz.local")
            .with_port(8080)
            .with_timeout(Duration::from_secs(3))
            .with_session(Client::new());

        assert_eq!(config.port(), 8080);
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert!(config.has_session());
    }

    #[test]
    fn into_client_ownership_follows_session() {
        let owned = HttpConfig::new("1.2.3.4").into_client().unwrap();
        assert!(owned.session().is_owned());

        let shared = HttpConfig::new("1.2.3.4")
            .with_session(Client::new())
            .into_client()
            .unwrap();
        assert!(!shared.session().is_owned());
    }

    #[test]
    fn resolve_relative_segment() {
        let base = Url::parse("http://1.2.3.4/api/v1/").unwrap();
        assert_eq!(
            resolve(&base, "light").unwrap().as_str(),
            "http://1.2.3.4/api/v1/light"
        );
        assert_eq!(
            resolve(&base, "led/set").unwrap().as_str(),
            "http://1.2.3.4/api/v1/led/set"
        );
    }

    #[test]
    fn resolve_absolute_path_replaces_base_path() {
        let base = Url::parse("http://1.2.3.4/api/v1/").unwrap();
        assert_eq!(
            resolve(&base, "/light").unwrap().as_str(),
            "http://1.2.3.4/light"
        );
    }

    #[test]
    fn resolve_without_trailing_slash_replaces_last_segment() {
        let base = Url::parse("http://1.2.3.4/api/v1").unwrap();
        assert_eq!(
            resolve(&base, "light").unwrap().as_str(),
            "http://1.2.3.4/api/light"
        );
    }

    #[test]
    fn url_for_endpoint() {
        let client = HttpClient::new("1.2.3.4").unwrap();
        assert_eq!(client.host(), "1.2.3.4");
        assert_eq!(
            client.url_for(Endpoint::Temperature).unwrap().as_str(),
            "http://1.2.3.4/api/v1/temp"
        );
    }
}
