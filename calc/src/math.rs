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

//! Stateless numeric helpers.
//!
//! None of these functions have side effects, so they may be called freely
//! from any thread and from any number of calculators at once.

use std::f64::consts::PI;

use tracing::debug;

use crate::error::{CalcError, Operation};

/// The tolerance used by [`is_zero`] and [`are_equal`].
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// The largest argument accepted by [`factorial`].
///
/// 170! is the largest factorial that fits in an `f64`.
pub const MAX_FACTORIAL: i32 = 170;

/// Reports whether `value` is within [`DEFAULT_EPSILON`] of zero.
///
/// ```
/// use calc::math;
///
/// assert!(math::is_zero(1e-10));
/// assert!(!math::is_zero(1e-8));
/// ```
pub fn is_zero(value: f64) -> bool {
    is_zero_within(value, DEFAULT_EPSILON)
}

/// Reports whether the magnitude of `value` is strictly less than `epsilon`.
pub fn is_zero_within(value: f64, epsilon: f64) -> bool {
    value.abs() < epsilon
}

/// Reports whether `a` and `b` differ by less than [`DEFAULT_EPSILON`].
pub fn are_equal(a: f64, b: f64) -> bool {
    are_equal_within(a, b, DEFAULT_EPSILON)
}

/// Reports whether `a` and `b` differ by strictly less than `epsilon`.
pub fn are_equal_within(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Computes `n!`.
///
/// Returns a domain error if `n` is negative and an overflow error if `n`
/// exceeds [`MAX_FACTORIAL`].
///
/// ```
/// # use std::error::Error;
/// use calc::math;
///
/// assert_eq!(math::factorial(5)?, 120.0);
/// assert!(math::factorial(171).is_err());
/// # Ok::<_, Box<dyn Error>>(())
/// ```
pub fn factorial(n: i32) -> Result<f64, CalcError> {
    if n < 0 {
        debug!(n, "rejecting factorial of negative number");
        return Err(CalcError::domain(Operation::Factorial));
    }
    if n > MAX_FACTORIAL {
        debug!(n, max = MAX_FACTORIAL, "rejecting factorial that would overflow");
        return Err(CalcError::overflow(Operation::Factorial));
    }
    if n <= 1 {
        return Ok(1.0);
    }
    let mut result = 1.0;
    for i in 2..=n {
        result *= f64::from(i);
    }
    Ok(result)
}

/// Raises `base` to the integer power `exponent`.
///
/// Any base raised to the zeroth power is one, including zero, infinity and
/// NaN. Negative exponents compute the reciprocal of the positive power and
/// return a domain error when `base` is zero within [`DEFAULT_EPSILON`].
///
/// ```
/// # use std::error::Error;
/// use calc::math;
///
/// assert_eq!(math::power(2.0, 10)?, 1024.0);
/// assert_eq!(math::power(2.0, -2)?, 0.25);
/// assert!(math::power(0.0, -1).is_err());
/// # Ok::<_, Box<dyn Error>>(())
/// ```
pub fn power(base: f64, exponent: i32) -> Result<f64, CalcError> {
    if exponent == 0 {
        return Ok(1.0);
    }
    if exponent < 0 {
        if is_zero(base) {
            debug!(base, exponent, "rejecting zero base with negative exponent");
            return Err(CalcError::domain(Operation::Power));
        }
        // `unsigned_abs` keeps `i32::MIN` representable.
        return Ok(1.0 / power_unsigned(base, exponent.unsigned_abs()));
    }
    Ok(power_unsigned(base, exponent.unsigned_abs()))
}

/// Binary exponentiation: square the base once per exponent bit and fold it
/// into the accumulator wherever that bit is set.
fn power_unsigned(base: f64, mut exponent: u32) -> f64 {
    let mut result = 1.0;
    let mut current = base;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= current;
        }
        current *= current;
        exponent >>= 1;
    }
    result
}

/// Converts an angle in degrees to radians.
pub fn degree_to_radian(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
pub fn radian_to_degree(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Reports whether `value` is neither infinite nor NaN.
pub fn is_finite(value: f64) -> bool {
    value.is_finite()
}

/// Reports whether `value` is a valid argument to a logarithm, i.e. positive
/// and finite.
pub fn is_valid_for_log(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

/// Reports whether `value` is a valid argument to a square root, i.e.
/// non-negative and finite.
pub fn is_valid_for_sqrt(value: f64) -> bool {
    value >= 0.0 && value.is_finite()
}
