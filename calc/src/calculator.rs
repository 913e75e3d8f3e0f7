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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CalcError, Operation};
use crate::math;

/// A four-function calculator with a one-register memory.
///
/// A calculator holds two independent registers:
///
///   * The *last result*, which every successful arithmetic operation
///     overwrites and which only [`clear`](BasicCalculator::clear) resets.
///
///   * The *memory*, which only the `memory_*` methods touch.
///
/// An operation that returns an error leaves both registers untouched.
///
/// With the `serde` feature, finite register values serialize as plain
/// numbers. Infinities and NaNs, which formats like JSON cannot express,
/// serialize as a `#` followed by the sixteen hex digits of their IEEE 754
/// bit pattern, so every reachable state survives a round trip.
///
/// ```
/// # use std::error::Error;
/// use calc::BasicCalculator;
///
/// let mut calc = BasicCalculator::new();
/// assert_eq!(calc.divide(10.0, 2.0)?, 5.0);
/// assert_eq!(calc.last_result(), 5.0);
///
/// assert!(calc.divide(10.0, 0.0).is_err());
/// assert_eq!(calc.last_result(), 5.0);
/// # Ok::<_, Box<dyn Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BasicCalculator {
    #[cfg_attr(feature = "serde", serde(with = "register"))]
    memory: f64,
    #[cfg_attr(feature = "serde", serde(with = "register"))]
    last_result: f64,
}

impl BasicCalculator {
    /// Constructs a calculator with both registers set to zero.
    pub fn new() -> BasicCalculator {
        BasicCalculator::default()
    }

    /// Computes `a + b`.
    ///
    /// Returns an overflow error if the sum is infinite.
    pub fn add(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.check_infinite(Operation::Add, a, b, a + b)
    }

    /// Computes `a - b`.
    ///
    /// Returns an overflow error if the difference is infinite.
    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.check_infinite(Operation::Subtract, a, b, a - b)
    }

    /// Computes `a * b`.
    ///
    /// Returns an overflow error if the product is infinite. A NaN product,
    /// as in `0 * inf`, is not an error and is recorded as the last result.
    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.check_infinite(Operation::Multiply, a, b, a * b)
    }

    /// Computes `a / b`.
    ///
    /// Returns a division by zero error if `b` is zero within
    /// [`DEFAULT_EPSILON`](math::DEFAULT_EPSILON). Unlike the other arithmetic
    /// operations, division never reports overflow: `f64::MAX / 0.5` yields
    /// infinity.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        if math::is_zero(b) {
            debug!(operation = %Operation::Divide, a, b, "rejecting division by zero");
            return Err(CalcError::division_by_zero());
        }
        Ok(self.update_last_result(a / b))
    }

    /// Overwrites the memory register.
    pub fn memory_store(&mut self, value: f64) {
        trace!(value, "memory store");
        self.memory = value;
    }

    /// Returns the contents of the memory register.
    pub fn memory_recall(&self) -> f64 {
        self.memory
    }

    /// Resets the memory register to zero.
    pub fn memory_clear(&mut self) {
        trace!("memory clear");
        self.memory = 0.0;
    }

    /// Resets the last result to zero. The memory register is unaffected.
    pub fn clear(&mut self) {
        trace!("clear");
        self.last_result = 0.0;
    }

    /// Returns the result of the most recent successful arithmetic operation.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    fn check_infinite(
        &mut self,
        operation: Operation,
        a: f64,
        b: f64,
        result: f64,
    ) -> Result<f64, CalcError> {
        if result.is_infinite() {
            debug!(operation = %operation, a, b, "rejecting infinite result");
            return Err(CalcError::overflow(operation));
        }
        Ok(self.update_last_result(result))
    }

    fn update_last_result(&mut self, result: f64) -> f64 {
        trace!(result, "updating last result");
        self.last_result = result;
        result
    }
}

#[cfg(feature = "serde")]
mod register {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Bits(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format!("#{:016x}", value.to_bits()))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Bits(s) => s
                .strip_prefix('#')
                .filter(|digits| digits.len() == 16)
                .and_then(|digits| u64::from_str_radix(digits, 16).ok())
                .map(f64::from_bits)
                .ok_or_else(|| de::Error::custom(format!("invalid register value \"{}\"", s))),
        }
    }
}
