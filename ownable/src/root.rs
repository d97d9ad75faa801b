// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

/// The length of a [`Root`] in bytes
pub const ROOT_BYTES: usize = 32;

/// Identifies the committed state of a store: the blake3 hash of its
/// archived bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Root([u8; ROOT_BYTES]);

impl Root {
    pub const fn from_bytes(bytes: [u8; ROOT_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; ROOT_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parses a root from its hex encoding, as used for file names.
    pub fn from_hex<T: AsRef<[u8]>>(digits: T) -> Option<Self> {
        let mut bytes = [0u8; ROOT_BYTES];
        hex::decode_to_slice(digits, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(crate) fn hash(bytes: &[u8]) -> Self {
        tracing::trace!("hashing {} bytes", bytes.len());
        Self(blake3::hash(bytes).into())
    }
}

impl From<[u8; ROOT_BYTES]> for Root {
    fn from(bytes: [u8; ROOT_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?
        }
        write!(f, "{}", self.to_hex())
    }
}
