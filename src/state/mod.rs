// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached device state.
//!
//! [`DingzState`] holds the last values seen by a [`Dingz`](crate::Dingz)
//! client; [`StateChange`] is what a successful refresh applies to it.

mod device_state;
mod state_change;

pub use device_state::DingzState;
pub use state_change::StateChange;
