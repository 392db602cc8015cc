// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP plumbing for the dingz REST API.
//!
//! - [`Endpoint`]: the static table of API paths
//! - [`HttpConfig`] / [`HttpClient`]: connection settings and the shared
//!   call helper
//! - [`Session`]: ownership of the underlying `reqwest::Client`

mod endpoint;
mod http;
mod session;

pub use endpoint::Endpoint;
pub use http::{HttpClient, HttpConfig, resolve};
pub use session::Session;
