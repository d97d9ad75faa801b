// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;
use core::str::FromStr;

use bytecheck::CheckBytes;
use rkyv::{Archive, Deserialize, Serialize};

use crate::ParseAddressError;

/// The length of an [`Address`] in bytes
pub const ADDRESS_BYTES: usize = 20;

/// The length of a [`Value`] in bytes
pub const VALUE_BYTES: usize = 32;

/// Identity of a caller, and of the owner of a store.
#[derive(
    PartialEq,
    Eq,
    Archive,
    Serialize,
    CheckBytes,
    Deserialize,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Default,
)]
#[archive(as = "Self")]
#[repr(C)]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    /// The null identity. No caller can ever present it, so a store owned by
    /// it can no longer be mutated.
    pub const ZERO: Self = Self([0u8; ADDRESS_BYTES]);

    /// Creates a new [`Address`] from an array of bytes
    pub const fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the array of bytes that make up the [`Address`]
    pub const fn to_bytes(self) -> [u8; ADDRESS_BYTES] {
        self.0
    }

    /// Returns a reference to the array of bytes that make up the
    /// [`Address`]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this is the null identity.
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    /// Parses 40 hex digits, optionally prefixed with `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; ADDRESS_BYTES];
        hex::decode_to_slice(digits, &mut bytes).map_err(ParseAddressError)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// The single 32 byte slot held by a store.
///
/// The store never looks inside. See [`Value::from_text`] and
/// [`Value::to_text`] for the conversion from and to short strings.
#[derive(
    PartialEq,
    Eq,
    Archive,
    Serialize,
    CheckBytes,
    Deserialize,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Default,
)]
#[archive(as = "Self")]
#[repr(C)]
pub struct Value([u8; VALUE_BYTES]);

impl Value {
    /// All zero bytes. This is what a freshly constructed store holds.
    pub const ZERO: Self = Self([0u8; VALUE_BYTES]);

    /// Creates a new [`Value`] from an array of bytes
    pub const fn from_bytes(bytes: [u8; VALUE_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the array of bytes that make up the [`Value`]
    pub const fn to_bytes(self) -> [u8; VALUE_BYTES] {
        self.0
    }

    /// Returns a reference to the array of bytes that make up the [`Value`]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl From<[u8; VALUE_BYTES]> for Value {
    fn from(bytes: [u8; VALUE_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

fn write_hex(f: &mut fmt::Formatter, bytes: &[u8]) -> fmt::Result {
    if f.alternate() {
        write!(f, "0x")?
    }
    for byte in bytes {
        write!(f, "{:02x}", byte)?
    }
    Ok(())
}

/// An event emitted by a store on every accepted mutation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize,
)]
#[archive_attr(derive(CheckBytes))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Event {
    /// Ownership moved from `previous` to `new`. At construction `previous`
    /// is [`Address::ZERO`].
    OwnershipTransferred { previous: Address, new: Address },
    /// `by` stored `value` in the slot.
    ValueStored { by: Address, value: Value },
}
