// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The dingz device client.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use url::Url;

use crate::error::{Error, ProtocolError};
use crate::protocol::{Endpoint, HttpClient, HttpConfig, Session};
use crate::response::{FrontLedResponse, LightResponse, TemperatureResponse};
use crate::state::{DingzState, StateChange};
use crate::types::{DayPhase, LedAction};

/// Client for one dingz device.
///
/// Refresh methods (`fetch_*`) perform HTTP calls and update the cached
/// state; accessors read the cache and never touch the network. A failed
/// refresh leaves the previous cached value in place.
///
/// Refresh methods take `&self`, so independent refreshes can run
/// concurrently. Two concurrent refreshes of the same field are not
/// serialized: whichever finishes last wins.
///
/// Dropping the client closes it, which releases the HTTP session only if
/// the client built it.
///
/// # Examples
///
/// ```no_run
/// use dingz::Dingz;
///
/// # async fn example() -> dingz::Result<()> {
/// let dingz = Dingz::new("192.168.1.42")?;
///
/// dingz.fetch_temperature().await?;
/// dingz.fetch_light().await?;
///
/// println!("{:?} °C, night: {}", dingz.temperature(), dingz.is_night());
/// # Ok(())
/// # }
/// ```
///
/// Sharing one `reqwest::Client` across devices:
///
/// ```no_run
/// use dingz::{Dingz, HttpConfig};
///
/// # async fn example() -> dingz::Result<()> {
/// let http = reqwest::Client::new();
/// let hall = Dingz::with_config(HttpConfig::new("192.168.1.42").with_session(http.clone()))?;
/// let kitchen = Dingz::with_config(HttpConfig::new("192.168.1.43").with_session(http.clone()))?;
///
/// hall.turn_on_front_led().await?;
/// kitchen.turn_off_front_led().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Dingz {
    http: HttpClient,
    state: RwLock<DingzState>,
}

impl Dingz {
    /// Creates a client for `host` with default settings and a self-owned
    /// session.
    ///
    /// # Errors
    ///
    /// Returns error if `host` does not form a valid URL.
    pub fn new(host: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(HttpConfig::new(host))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configured host does not form a valid URL.
    pub fn with_config(config: HttpConfig) -> Result<Self, Error> {
        let http = config.into_client()?;
        tracing::debug!(
            host = http.host(),
            base_url = %http.base_url(),
            owned_session = http.session().is_owned(),
            "Created dingz client"
        );
        Ok(Self {
            http,
            state: RwLock::new(DingzState::new()),
        })
    }

    /// Returns the device host.
    #[must_use]
    pub fn host(&self) -> &str {
        self.http.host()
    }

    /// Returns the API root URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }

    /// Returns the full URL of an endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the path cannot be joined.
    pub fn url_for(&self, endpoint: Endpoint) -> Result<Url, ProtocolError> {
        self.http.url_for(endpoint)
    }

    /// Returns `true` if the client created its own HTTP session.
    #[must_use]
    pub fn owns_session(&self) -> bool {
        self.http.session().is_owned()
    }

    /// Returns a handle to the HTTP session.
    ///
    /// The handle outlives the client, so it can be used to check that the
    /// session was closed after the client went out of scope.
    #[must_use]
    pub fn session(&self) -> Arc<Session> {
        Arc::clone(self.http.session())
    }

    /// Returns `true` once the client has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.http.session().is_closed()
    }

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> DingzState {
        self.state.read().clone()
    }

    fn apply(&self, change: StateChange) {
        self.state.write().apply(change);
    }

    // ========== Refresh ==========

    /// Fetches the device info payload.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn fetch_device_info(&self) -> Result<(), Error> {
        let details = self.http.get(Endpoint::DeviceInfo).await?;
        self.apply(StateChange::DeviceDetails(details));
        Ok(())
    }

    /// Fetches every configuration endpoint, one after the other.
    ///
    /// The cache is only updated once all seven calls succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first error; later endpoints are not queried.
    pub async fn fetch_everything(&self) -> Result<(), Error> {
        let mut entries = Vec::with_capacity(Endpoint::SNAPSHOT.len());
        for endpoint in Endpoint::SNAPSHOT {
            let body = self.http.get(endpoint).await?;
            entries.push((endpoint, body));
        }
        self.apply(StateChange::Snapshot(entries));
        Ok(())
    }

    /// Fetches the room temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body has no numeric
    /// `temperature` field.
    pub async fn fetch_temperature(&self) -> Result<(), Error> {
        let body = self.http.get(Endpoint::Temperature).await?;
        let response = TemperatureResponse::from_value(body)?;
        self.apply(StateChange::Temperature(response.temperature()));
        Ok(())
    }

    /// Fetches the configured button actions.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn fetch_button_action(&self) -> Result<(), Error> {
        let action = self.http.get(Endpoint::ButtonActions).await?;
        self.apply(StateChange::ButtonAction(action));
        Ok(())
    }

    /// Fetches the light sensor reading.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body lacks `intensity` or
    /// `state`.
    pub async fn fetch_light(&self) -> Result<(), Error> {
        let body = self.http.get(Endpoint::Light).await?;
        let response = LightResponse::from_value(body)?;
        tracing::debug!(
            intensity = response.intensity(),
            state = response.state(),
            "Light reading"
        );
        self.apply(StateChange::Light {
            intensity: response.intensity(),
            phase: response.phase(),
        });
        Ok(())
    }

    // ========== Front LED ==========

    /// Queries whether the front LED is on. Does not touch the cache.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body has no `on` field. The
    /// field may be a boolean or a number; non-zero numbers count as on.
    pub async fn is_front_led_on(&self) -> Result<bool, Error> {
        let body = self.http.get(Endpoint::FrontLedGet).await?;
        Ok(FrontLedResponse::from_value(body)?.is_on())
    }

    /// Turns the front LED on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn turn_on_front_led(&self) -> Result<(), Error> {
        self.set_front_led(LedAction::On).await
    }

    /// Turns the front LED off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn turn_off_front_led(&self) -> Result<(), Error> {
        self.set_front_led(LedAction::Off).await
    }

    /// Sends an action to the front LED.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_front_led(&self, action: LedAction) -> Result<(), Error> {
        self.http
            .post_form(Endpoint::FrontLedSet, &action.form())
            .await?;
        Ok(())
    }

    // ========== Accessors ==========

    /// Last device info payload.
    #[must_use]
    pub fn device_details(&self) -> Option<Value> {
        self.state.read().device_details().cloned()
    }

    /// Last aggregate snapshot, keyed by endpoint.
    #[must_use]
    pub fn everything(&self) -> BTreeMap<Endpoint, Value> {
        self.state.read().everything().clone()
    }

    /// Last button action payload.
    #[must_use]
    pub fn button_action(&self) -> Option<Value> {
        self.state.read().button_action().cloned()
    }

    /// Last temperature in degrees Celsius, rounded to one decimal place.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.state.read().temperature()
    }

    /// Last light intensity in lux, rounded to one decimal place.
    #[must_use]
    pub fn intensity(&self) -> Option<f64> {
        self.state.read().intensity()
    }

    /// Last day/night classification.
    #[must_use]
    pub fn day_night_state(&self) -> Option<DayPhase> {
        self.state.read().day_phase().cloned()
    }

    /// `true` if the light sensor last reported day.
    #[must_use]
    pub fn is_day(&self) -> bool {
        self.state.read().is_day()
    }

    /// `true` if the light sensor last reported night.
    #[must_use]
    pub fn is_night(&self) -> bool {
        self.state.read().is_night()
    }

    // ========== Lifecycle ==========

    /// Closes the client.
    ///
    /// Releases the HTTP session if the client built it; a caller-supplied
    /// session is left alone. Later refreshes fail with
    /// `ProtocolError::SessionClosed`. Safe to call more than once.
    ///
    /// Returns `true` if this call released a session.
    pub fn close(&self) -> bool {
        self.http.session().close()
    }
}

impl Drop for Dingz {
    fn drop(&mut self) {
        self.close();
    }
}
