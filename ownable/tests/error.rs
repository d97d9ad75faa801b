// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;

use ownable::{
    Address, CallError, Error, OwnableValueStore, Root, Value, Vault,
};

const ALICE: Address = Address::from_bytes([0xa1; 20]);
const BOB: Address = Address::from_bytes([0xb0; 20]);

fn code(err: Error) -> i32 {
    i32::from(CallError::from(err))
}

#[test]
fn rejected_write_is_unauthorized_at_the_boundary() {
    let mut store = OwnableValueStore::new(ALICE);
    let err = store
        .write_value(BOB, Value::from_text("x"))
        .expect_err("only the owner may write");

    let call_err = CallError::from(err);
    assert_eq!(call_err, CallError::Unauthorized);
    assert_eq!(i32::from(call_err), -1);
}

#[test]
fn host_failures_are_distinct_from_unauthorized() {
    let io_err = || io::Error::new(io::ErrorKind::Other, "disk on fire");

    let codes = [
        code(Error::CommitDoesNotExist(Root::from_bytes([1; 32]))),
        code(Error::ValidationError),
        code(Error::PersistenceError(io_err().into())),
        code(Error::RestoreError(io_err().into())),
    ];

    for (i, c) in codes.iter().enumerate() {
        assert!(*c < 0, "code {c} must signal a failure");
        assert_ne!(*c, -1, "code {c} must not read as unauthorized");
        assert!(!CallError::from_code(*c).is_unauthorized());
        assert!(
            codes[i + 1..].iter().all(|other| other != c),
            "code {c} must be unique"
        );
    }
}

#[test]
fn missing_commit_maps_to_its_code() -> Result<(), Error> {
    let vault = Vault::ephemeral()?;
    let err = vault
        .restore(&Root::from_bytes([9; 32]))
        .expect_err("nothing was committed");

    assert_eq!(
        CallError::from(err),
        CallError::from(Error::CommitDoesNotExist(Root::from_bytes([9; 32])))
    );

    Ok(())
}
