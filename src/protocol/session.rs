// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP session ownership.
//!
//! A [`Session`] either wraps a `reqwest::Client` handed in by the caller, or
//! builds its own on first use. Only a self-built client is released by
//! [`Session::close`]; a shared client stays usable by its owner.

use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;

use crate::error::ProtocolError;

#[derive(Debug)]
enum Slot {
    /// Owned session not built yet.
    Pending,
    Open(Client),
    Closed {
        /// Whether closing dropped a self-built client.
        released: bool,
    },
}

/// The HTTP session used by a device client.
#[derive(Debug)]
pub struct Session {
    slot: Mutex<Slot>,
    owned: bool,
    timeout: Duration,
}

impl Session {
    /// Wraps a caller-owned client.
    #[must_use]
    pub fn shared(client: Client) -> Self {
        Self {
            slot: Mutex::new(Slot::Open(client)),
            owned: false,
            timeout: Duration::ZERO,
        }
    }

    /// Creates a session that builds its own client lazily, with the given
    /// request timeout.
    #[must_use]
    pub fn owned(timeout: Duration) -> Self {
        Self {
            slot: Mutex::new(Slot::Pending),
            owned: true,
            timeout,
        }
    }

    /// Returns `true` if this session created (and therefore releases) its client.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Request timeout of a self-built client. Zero for shared sessions.
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `true` once [`close`](Self::close) has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Closed { .. })
    }

    /// Returns `true` if a self-built client was released by closing.
    #[must_use]
    pub fn was_released(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Closed { released: true })
    }

    /// Returns a handle to the client, building it first if needed.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::SessionClosed` after close, or
    /// `ProtocolError::Http` if the client cannot be built.
    pub(crate) fn client(&self) -> Result<Client, ProtocolError> {
        let mut slot = self.slot.lock();
        match &*slot {
            Slot::Open(client) => Ok(client.clone()),
            Slot::Closed { .. } => Err(ProtocolError::SessionClosed),
            Slot::Pending => {
                let client = Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(ProtocolError::Http)?;
                tracing::debug!(timeout = ?self.timeout, "Created HTTP session");
                *slot = Slot::Open(client.clone());
                Ok(client)
            }
        }
    }

    /// Closes the session.
    ///
    /// Returns `true` if this call released a self-built client. Closing a
    /// shared session, a session that never built its client, or an already
    /// closed session returns `false`.
    pub fn close(&self) -> bool {
        let mut slot = self.slot.lock();
        if matches!(*slot, Slot::Closed { .. }) {
            return false;
        }

        let previous = std::mem::replace(&mut *slot, Slot::Closed { released: false });
        let released = self.owned && matches!(previous, Slot::Open(_));
        drop(previous);
        if released {
            tracing::debug!("Released HTTP session");
            *slot = Slot::Closed { released };
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_session_builds_lazily() {
        let session = Session::owned(Duration::from_secs(1));
        assert!(session.is_owned());
        assert!(!session.is_closed());
        assert!(session.client().is_ok());
    }

    #[test]
    fn owned_session_released_once() {
        let session = Session::owned(Duration::from_secs(1));
        session.client().unwrap();

        assert!(session.close());
        assert!(!session.close());
        assert!(session.is_closed());
        assert!(session.was_released());
    }

    #[test]
    fn unused_owned_session_has_nothing_to_release() {
        let session = Session::owned(Duration::from_secs(1));
        assert!(!session.close());
        assert!(session.is_closed());
        assert!(!session.was_released());
    }

    #[test]
    fn shared_session_never_released() {
        let session = Session::shared(Client::new());
        assert!(!session.is_owned());
        assert!(!session.close());
        assert!(!session.close());
        assert!(!session.was_released());
    }

    #[test]
    fn closed_session_refuses_client() {
        let session = Session::shared(Client::new());
        session.close();
        assert!(matches!(
            session.client(),
            Err(ProtocolError::SessionClosed)
        ));
    }
}
