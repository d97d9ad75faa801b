// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Address, Value, ADDRESS_BYTES, VALUE_BYTES};

impl Serialize for Address {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        hex::serde::serialize(self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let bytes: [u8; ADDRESS_BYTES] =
            hex::serde::deserialize(deserializer)?;
        Ok(bytes.into())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        hex::serde::serialize(self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let bytes: [u8; VALUE_BYTES] = hex::serde::deserialize(deserializer)?;
        Ok(bytes.into())
    }
}
