// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Async client for the local HTTP API of dingz smart-home switches.
//!
//! A [`Dingz`] talks to one device over plain HTTP under `/api/v1/`. Refresh
//! methods issue requests and cache what they read; accessors return the
//! cached values without I/O.
//!
//! # Supported Features
//!
//! - **Sensors**: temperature, light intensity, day/night classification
//! - **Configuration**: device info, button actions, and an aggregate
//!   snapshot of every configuration endpoint
//! - **Front LED**: query and switch on/off
//!
//! # Quick Start
//!
//! ```no_run
//! use dingz::Dingz;
//!
//! #[tokio::main]
//! async fn main() -> dingz::Result<()> {
//!     let dingz = Dingz::new("192.168.1.42")?;
//!
//!     dingz.fetch_temperature().await?;
//!     if let Some(celsius) = dingz.temperature() {
//!         println!("{celsius} °C");
//!     }
//!
//!     if !dingz.is_front_led_on().await? {
//!         dingz.turn_on_front_led().await?;
//!     }
//!
//!     dingz.close();
//!     Ok(())
//! }
//! ```
//!
//! # Sessions
//!
//! By default the client builds its own `reqwest::Client` on first use and
//! releases it on [`Dingz::close`] or drop. Pass a shared client with
//! [`HttpConfig::with_session`] to pool connections across devices; it is
//! never released by this crate.

mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use device::Dingz;
pub use error::{Error, ParseError, ProtocolError, Result};
pub use protocol::{Endpoint, HttpClient, HttpConfig};
pub use state::{DingzState, StateChange};
pub use types::{DayPhase, LedAction};
