// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use bytecheck::CheckBytes;
use rkyv::{Archive, Deserialize, Serialize};

use core::fmt::{Display, Formatter};

/// The error returned by a rejected call on a store.
//
// At a call boundary this travels as a negative return code, leaving the
// non-negative range for successful calls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize,
)]
#[archive_attr(derive(CheckBytes))]
pub enum CallError {
    /// The caller is not the current owner.
    Unauthorized,
    /// Anything not caused by the caller's identity.
    ///
    /// Codes that are non-negative or equal to the unauthorized code cannot
    /// travel as such, and are encoded as [`CallError::OTHER`].
    Other(i32),
}

impl CallError {
    const UNAUTHORIZED: i32 = -1;

    /// The code for a failure that is not the caller's fault and carries no
    /// more specific code of its own.
    pub const OTHER: i32 = -2;

    /// Creates an [`Other`](Self::Other) error, replacing codes reserved for
    /// success or for [`Unauthorized`](Self::Unauthorized) by
    /// [`CallError::OTHER`].
    pub const fn other(code: i32) -> Self {
        if code >= 0 || code == Self::UNAUTHORIZED {
            Self::Other(Self::OTHER)
        } else {
            Self::Other(code)
        }
    }

    /// Returns a call error from a return `code`.
    ///
    /// # Panic
    /// Panics if the value is larger than or equal to 0.
    pub fn from_code(code: i32) -> Self {
        if code >= 0 {
            panic!("A `CallError` is never equal or larger than 0, got {code}");
        }

        match code {
            Self::UNAUTHORIZED => Self::Unauthorized,
            v => Self::Other(v),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<CallError> for i32 {
    fn from(err: CallError) -> Self {
        match err {
            CallError::Unauthorized => CallError::UNAUTHORIZED,
            CallError::Other(c) if c < 0 && c != CallError::UNAUTHORIZED => c,
            CallError::Other(_) => CallError::OTHER,
        }
    }
}

impl Display for CallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CallError::Unauthorized => write!(f, "caller is not the owner"),
            CallError::Other(c) => write!(f, "OTHER: {c}"),
        }
    }
}

/// Failure to move text in or out of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The text does not fit, counting the terminating zero byte.
    TooLong { len: usize },
    /// The slot does not hold UTF-8 up to its first zero byte.
    Utf8(core::str::Utf8Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::TooLong { len } => {
                write!(f, "text of {len} bytes does not fit in a value")
            }
            CodecError::Utf8(err) => write!(f, "invalid text: {err}"),
        }
    }
}

/// Failure to parse an [`Address`](crate::Address) from hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseAddressError(pub(crate) hex::FromHexError);

impl Display for ParseAddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid address: {}", self.0)
    }
}
