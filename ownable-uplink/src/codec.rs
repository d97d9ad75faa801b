// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Conversion between short UTF-8 strings and the fixed width [`Value`] slot.

use crate::{CodecError, Value, VALUE_BYTES};

impl Value {
    /// Encodes `text` into a value, zero padding it on the right.
    ///
    /// Text longer than [`VALUE_BYTES`] is truncated at the last character
    /// boundary that still fits, so the result always decodes.
    pub fn from_text(text: &str) -> Self {
        let mut end = text.len().min(VALUE_BYTES);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0u8; VALUE_BYTES];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self::from_bytes(bytes)
    }

    /// Encodes `text`, refusing anything that would not leave room for a
    /// terminating zero byte.
    pub fn try_from_text(text: &str) -> Result<Self, CodecError> {
        let len = text.len();
        if len >= VALUE_BYTES {
            return Err(CodecError::TooLong { len });
        }
        Ok(Self::from_text(text))
    }

    /// Decodes the bytes up to the first zero byte as UTF-8.
    pub fn to_text(&self) -> Result<&str, CodecError> {
        let bytes = self.as_bytes();
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(VALUE_BYTES);
        core::str::from_utf8(&bytes[..end]).map_err(CodecError::Utf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        // 31 ASCII bytes followed by a two byte character
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaé";
        assert_eq!(text.len(), 33);

        let value = Value::from_text(text);
        assert_eq!(value.to_text(), Ok(&text[..31]));
    }

    #[test]
    fn strict_leaves_room_for_terminator() {
        let fits = "0123456789012345678901234567890";
        assert_eq!(fits.len(), 31);
        assert!(Value::try_from_text(fits).is_ok());

        let too_long = "01234567890123456789012345678901";
        assert_eq!(
            Value::try_from_text(too_long),
            Err(CodecError::TooLong { len: 32 })
        );
    }
}
