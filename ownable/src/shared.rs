// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::sync::Arc;

use parking_lot::RwLock;

use ownable_uplink::{Address, Event, Value};

use crate::{Error, OwnableValueStore, StoreState};

/// A store that can be shared between threads.
///
/// Clones refer to the same store. Each mutation holds the write lock from
/// the ownership check until the change is applied, so ownership cannot move
/// in between.
///
/// The store's event journal keeps growing while the store lives. A long
/// running host should drain it regularly with
/// [`take_events`](Self::take_events).
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<OwnableValueStore>>,
}

impl SharedStore {
    pub fn new(store: OwnableValueStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read_value(&self, caller: Address) -> Value {
        self.inner.read().read_value(caller)
    }

    pub fn read_owner(&self, caller: Address) -> Address {
        self.inner.read().read_owner(caller)
    }

    /// A consistent snapshot of owner and value.
    pub fn state(&self) -> StoreState {
        self.inner.read().state()
    }

    pub fn write_value(
        &self,
        caller: Address,
        value: Value,
    ) -> Result<(), Error> {
        self.inner.write().write_value(caller, value)
    }

    pub fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        self.inner.write().transfer_ownership(caller, new_owner)
    }

    pub fn renounce_ownership(&self, caller: Address) -> Result<(), Error> {
        self.inner.write().renounce_ownership(caller)
    }

    pub fn take_events(&self) -> Vec<Event> {
        self.inner.write().take_events()
    }

    /// Runs `closure` with shared access to the underlying store.
    pub fn with_store<F, R>(&self, closure: F) -> R
    where
        F: FnOnce(&OwnableValueStore) -> R,
    {
        let guard = self.inner.read();
        closure(&guard)
    }
}

impl From<OwnableValueStore> for SharedStore {
    fn from(store: OwnableValueStore) -> Self {
        Self::new(store)
    }
}
