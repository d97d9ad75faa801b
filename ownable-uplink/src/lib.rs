// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Types shared between an ownable value store and whoever talks to it.
//!
//! The store itself only ever sees opaque [`Address`]es and [`Value`]s. The
//! text codec on [`Value`] lives here so that callers can normalize their
//! input before it reaches the store.

#![no_std]

mod codec;

mod types;
pub use types::*;

mod error;
pub use error::*;

#[cfg(feature = "serde")]
mod serde_support;
