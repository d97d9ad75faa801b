// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The owner-gated value slot.

use bytecheck::CheckBytes;
use rkyv::ser::serializers::{
    BufferScratch, BufferSerializer, CompositeSerializer,
};
use rkyv::ser::Serializer;
use rkyv::{Archive, Deserialize, Serialize};

use ownable_uplink::{Address, Event, Value};

use crate::{Error, Root};

/// How many bytes to use for scratch space when serializing
const SCRATCH_BUF_BYTES: usize = 64;

/// Upper bound on the archived size of a [`StoreState`]
const STATE_BUF_LEN: usize = 128;

/// The part of a store that survives a commit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize,
)]
#[archive_attr(derive(CheckBytes))]
pub struct StoreState {
    pub owner: Address,
    pub value: Value,
}

impl StoreState {
    /// Archives the state into its byte representation.
    pub(crate) fn to_archived_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut buf = [0u8; STATE_BUF_LEN];
        let mut scratch = [0u8; SCRATCH_BUF_BYTES];

        let ser = BufferSerializer::new(&mut buf[..]);
        let scratch = BufferScratch::new(&mut scratch);
        let mut composite =
            CompositeSerializer::new(ser, scratch, rkyv::Infallible);
        composite.serialize_value(self)?;
        let pos = composite.pos();

        Ok(buf[..pos].to_vec())
    }

    /// Validates `bytes` and reads a state back from them.
    pub(crate) fn from_archived_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let archived = rkyv::check_archived_root::<Self>(bytes)?;
        Ok(Self {
            owner: archived.owner,
            value: archived.value,
        })
    }
}

/// A single [`Value`] that anyone can read, and only the current owner can
/// write or hand over to someone else.
///
/// Every operation takes the identity of its caller explicitly. Reads ignore
/// it; mutations compare it with the owner and either apply in full or return
/// [`Error::Unauthorized`] leaving the store untouched.
///
/// Accepted mutations are recorded as [`Event`]s, which can be drained with
/// [`take_events`](Self::take_events). The journal is unbounded: it grows by
/// one event per accepted mutation until drained, and cloning the store
/// clones it too.
#[derive(Debug, Clone)]
pub struct OwnableValueStore {
    state: StoreState,
    events: Vec<Event>,
}

impl OwnableValueStore {
    /// Creates a store owned by `caller`, holding [`Value::ZERO`].
    pub fn new(caller: Address) -> Self {
        tracing::debug!(owner = %caller, "store constructed");
        Self {
            state: StoreState {
                owner: caller,
                value: Value::ZERO,
            },
            events: vec![Event::OwnershipTransferred {
                previous: Address::ZERO,
                new: caller,
            }],
        }
    }

    /// Creates a store owned by `caller`, already holding `value`.
    pub fn with_value(caller: Address, value: Value) -> Self {
        let mut store = Self::new(caller);
        store.state.value = value;
        store.events.push(Event::ValueStored { by: caller, value });
        store
    }

    /// Rebuilds a store from previously committed state. No events are
    /// emitted.
    pub fn from_state(state: StoreState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    /// A copy of the committable state.
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Returns the current value. Anyone may read.
    pub fn read_value(&self, _caller: Address) -> Value {
        self.state.value
    }

    /// Returns the current owner. Anyone may read.
    pub fn read_owner(&self, _caller: Address) -> Address {
        self.state.owner
    }

    pub fn is_owner(&self, address: Address) -> bool {
        !self.is_locked() && self.state.owner == address
    }

    /// A store owned by [`Address::ZERO`] can never be mutated again.
    pub fn is_locked(&self) -> bool {
        self.state.owner.is_zero()
    }

    /// Replaces the value, if `caller` is the owner.
    pub fn write_value(
        &mut self,
        caller: Address,
        value: Value,
    ) -> Result<(), Error> {
        self.only_owner(caller)?;

        self.state.value = value;
        self.events.push(Event::ValueStored { by: caller, value });
        tracing::debug!(%caller, %value, "value stored");

        Ok(())
    }

    /// Hands the store over to `new_owner`, if `caller` is the owner.
    ///
    /// `new_owner` is not checked. Passing [`Address::ZERO`] locks the store
    /// for good, exactly like [`renounce_ownership`](Self::renounce_ownership).
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        self.only_owner(caller)?;

        let previous = self.state.owner;
        self.state.owner = new_owner;
        self.events.push(Event::OwnershipTransferred {
            previous,
            new: new_owner,
        });

        if new_owner.is_zero() {
            tracing::warn!(%previous, "ownership given up, store is locked");
        } else {
            tracing::debug!(
                %previous,
                new = %new_owner,
                "ownership transferred"
            );
        }

        Ok(())
    }

    /// Gives up ownership, leaving the store locked.
    pub fn renounce_ownership(&mut self, caller: Address) -> Result<(), Error> {
        self.transfer_ownership(caller, Address::ZERO)
    }

    /// Events emitted since construction, or since the last call to
    /// [`take_events`](Self::take_events).
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    /// The root the current state would be committed under.
    pub fn root(&self) -> Result<Root, Error> {
        let bytes = self.state.to_archived_bytes()?;
        Ok(Root::hash(&bytes))
    }

    fn only_owner(&self, caller: Address) -> Result<(), Error> {
        let owner = self.state.owner;
        if !self.is_owner(caller) {
            tracing::warn!(%caller, %owner, "caller is not the owner");
            return Err(Error::Unauthorized { caller, owner });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: Address = Address::from_bytes([0xa1; 20]);

    #[test]
    fn archived_state_round_trip() -> Result<(), Error> {
        let state = StoreState {
            owner: ALICE,
            value: Value::from_text("Hello World!"),
        };

        let bytes = state.to_archived_bytes()?;
        assert_eq!(StoreState::from_archived_bytes(&bytes)?, state);

        Ok(())
    }

    #[test]
    fn truncated_archive_is_rejected() -> Result<(), Error> {
        let bytes = OwnableValueStore::new(ALICE).state().to_archived_bytes()?;

        let res = StoreState::from_archived_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(res, Err(Error::ValidationError)));

        Ok(())
    }

    #[test]
    fn zero_caller_cannot_mutate_locked_store() {
        let mut store = OwnableValueStore::new(ALICE);
        store
            .renounce_ownership(ALICE)
            .expect("owner should be able to renounce");

        let res = store.write_value(Address::ZERO, Value::from_text("x"));
        assert!(matches!(res, Err(Error::Unauthorized { .. })));
        assert!(store.read_value(ALICE).is_zero());
    }
}
