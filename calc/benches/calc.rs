// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use rand::{thread_rng, Rng};

use calc::{math, BasicCalculator};

fn bench_power(base: f64, exponent: i32, b: &mut Bencher) {
    b.iter(|| math::power(black_box(base), black_box(exponent)))
}

fn bench_factorial(n: i32, b: &mut Bencher) {
    b.iter(|| math::factorial(black_box(n)))
}

fn bench_calculator(a: f64, d: f64, b: &mut Bencher) {
    b.iter_with_setup(BasicCalculator::new, |mut calc| {
        let _ = calc.add(a, d);
        let _ = calc.subtract(a, d);
        let _ = calc.multiply(a, d);
        let _ = calc.divide(a, d);
        calc
    })
}

pub fn bench_math(c: &mut Criterion) {
    let mut rng = thread_rng();

    // power
    let base: f64 = rng.gen_range(0.5, 2.0);
    c.bench_function("power_small", |b| bench_power(base, 7, b));
    c.bench_function("power_large", |b| bench_power(base, i32::MAX, b));
    c.bench_function("power_negative", |b| bench_power(base, -1000, b));

    // factorial
    c.bench_function("factorial_max", |b| {
        bench_factorial(math::MAX_FACTORIAL, b)
    });
}

pub fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = thread_rng();
    let a: f64 = rng.gen();
    let d: f64 = rng.gen_range(1.0, 100.0);
    c.bench_function("calculator_arithmetic", |b| bench_calculator(a, d, b));
}

criterion_group!(benches, bench_math, bench_arithmetic);
criterion_main!(benches);
