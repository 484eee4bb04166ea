// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use isa::atmosphere::{LAYERS, MAX_ALTITUDE};
use isa::prelude::*;

/// Benchmark a single computation in each layer
fn bench_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("layers");

    for layer in LAYERS.iter() {
        let input = ComputationInput::si((layer.base() + layer.top()) / 2.0, 101325.0, 288.15);

        group.bench_function(layer.name(), |b| b.iter(|| compute(black_box(&input))));
    }

    group.finish();
}

/// Benchmark a profile from sea level to the top of the model in 1 m steps
fn bench_profile(c: &mut Criterion) {
    let inputs: Vec<_> = (0..=MAX_ALTITUDE as u32)
        .map(|h| ComputationInput::isa(Altitude::m(h as f64)))
        .collect();
    let mut group = c.benchmark_group("profile");

    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("sea level to 84852 m", |b| {
        b.iter(|| {
            let mut count = 0;
            for input in inputs.iter() {
                if compute(black_box(input)).is_ok() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });

    // Out of range altitudes return early
    let above = ComputationInput::isa(Altitude::m(MAX_ALTITUDE + 1.0));
    group.bench_function("out of range", |b| {
        b.iter(|| compute(black_box(&above)))
    });

    group.finish();
}

criterion_group!(benches, bench_layers, bench_profile);
criterion_main!(benches);
