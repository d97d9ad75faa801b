// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A minimal access-controlled value store.
//!
//! An [`OwnableValueStore`] holds exactly one 32 byte [`Value`] and exactly
//! one owner [`Address`]. Anybody can read both. Only the owner can write the
//! value or transfer ownership; anybody else gets [`Error::Unauthorized`] and
//! the store stays as it was.
//!
//! ```
//! use ownable::{Address, Error, OwnableValueStore, Value};
//!
//! let alice = Address::from_bytes([1; 20]);
//! let bob = Address::from_bytes([2; 20]);
//!
//! let mut store = OwnableValueStore::new(alice);
//! store.write_value(alice, Value::from_text("Hello World!"))?;
//!
//! assert!(store.write_value(bob, Value::from_text("x")).is_err());
//! assert_eq!(store.read_value(bob).to_text(), Ok("Hello World!"));
//! # Ok::<(), Error>(())
//! ```
//!
//! [`SharedStore`] puts a store behind a lock for use from many threads, and
//! a [`Vault`] commits its state to disk.

mod error;
mod root;
mod shared;
mod store;
mod vault;

pub use error::{Compo, Error};
pub use root::{Root, ROOT_BYTES};
pub use shared::SharedStore;
pub use store::{OwnableValueStore, StoreState};
pub use vault::Vault;

// re-exports

pub use ownable_uplink::{
    Address, CallError, CodecError, Event, Value, ADDRESS_BYTES, VALUE_BYTES,
};
