// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ownable_uplink::{Address, CallError, CodecError, Value, ADDRESS_BYTES};

#[test]
fn address_display_and_parse() {
    let mut bytes = [0u8; ADDRESS_BYTES];
    bytes[0] = 0xde;
    bytes[ADDRESS_BYTES - 1] = 0x01;
    let address = Address::from(bytes);

    let plain = address.to_string();
    assert_eq!(plain, "de00000000000000000000000000000000000001");
    assert_eq!(format!("{address:#}"), format!("0x{plain}"));

    assert_eq!(plain.parse::<Address>(), Ok(address));
    assert_eq!(format!("{address:#}").parse::<Address>(), Ok(address));
}

#[test]
fn address_parse_rejects_garbage() {
    assert!("0x1234".parse::<Address>().is_err());
    assert!("zz00000000000000000000000000000000000001"
        .parse::<Address>()
        .is_err());
}

#[test]
fn zero_identities() {
    assert!(Address::ZERO.is_zero());
    assert_eq!(Address::default(), Address::ZERO);
    assert!(Value::default().is_zero());
    assert_eq!(Value::ZERO.to_text(), Ok(""));
}

#[test]
fn text_round_trip() {
    let value = Value::from_text("Hello World!");
    assert_eq!(value.to_text(), Ok("Hello World!"));
    assert_eq!(&value.as_bytes()[12..], &[0u8; 20]);
}

#[test]
fn text_rejects_invalid_utf8() {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xff;
    let value = Value::from_bytes(bytes);
    assert!(matches!(value.to_text(), Err(CodecError::Utf8(_))));
}

#[test]
fn call_error_codes() {
    assert_eq!(i32::from(CallError::Unauthorized), -1);
    assert_eq!(CallError::from_code(-1), CallError::Unauthorized);
    assert_eq!(CallError::from_code(-7), CallError::Other(-7));
    assert!(CallError::Unauthorized.is_unauthorized());
    assert!(!CallError::Other(-2).is_unauthorized());
}

#[test]
fn call_error_round_trips() {
    for err in [
        CallError::Unauthorized,
        CallError::Other(CallError::OTHER),
        CallError::Other(-3),
        CallError::Other(i32::MIN),
    ] {
        assert_eq!(CallError::from_code(i32::from(err)), err);
    }
}

#[test]
fn reserved_codes_stay_other() {
    for code in [-1, 0, 1, i32::MAX] {
        let decoded = CallError::from_code(i32::from(CallError::Other(code)));
        assert_eq!(decoded, CallError::Other(CallError::OTHER));
        assert!(!decoded.is_unauthorized());

        assert_eq!(CallError::other(code), CallError::Other(CallError::OTHER));
    }
    assert_eq!(CallError::other(-9), CallError::Other(-9));
}

#[test]
#[should_panic]
fn call_error_from_success_code() {
    CallError::from_code(0);
}
