// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ownable::{Address, OwnableValueStore, Value};

const SAMPLE_SIZE: usize = 10240;

const ALICE: Address = Address::from_bytes([0xa1; 20]);
const BOB: Address = Address::from_bytes([0xb0; 20]);

fn config() -> Criterion {
    Criterion::default().sample_size(SAMPLE_SIZE)
}

fn write(c: &mut Criterion) {
    let mut store = OwnableValueStore::new(ALICE);
    let value = Value::from_text("Hello World!");

    c.bench_function("write", |b| {
        b.iter(|| {
            store
                .write_value(ALICE, black_box(value))
                .expect("Writing as owner should succeed");
            store.take_events();
        });
    });
}

fn rejected_write(c: &mut Criterion) {
    let mut store = OwnableValueStore::new(ALICE);
    let value = Value::from_text("Hello World!");

    c.bench_function("rejected_write", |b| {
        b.iter(|| {
            store
                .write_value(BOB, black_box(value))
                .expect_err("Writing as stranger should fail");
        });
    });
}

fn transfer(c: &mut Criterion) {
    let mut store = OwnableValueStore::new(ALICE);

    c.bench_function("transfer", |b| {
        b.iter(|| {
            store
                .transfer_ownership(ALICE, black_box(ALICE))
                .expect("Transferring as owner should succeed");
            store.take_events();
        });
    });
}

criterion_group!(
    name = benches;
    config = config();
    targets = write, rejected_write, transfer
);
criterion_main!(benches);
