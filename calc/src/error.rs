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

use std::error::Error;
use std::fmt;

#[cfg(feature = "serde")]
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of exceptional condition raised by an operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// The input is mathematically undefined for the operation, e.g. the
    /// factorial of a negative number.
    Domain,
    /// The result is too large to be represented.
    Overflow,
    /// The divisor is zero, within the default epsilon.
    DivisionByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Domain => f.write_str("domain error"),
            ErrorKind::Overflow => f.write_str("overflow"),
            ErrorKind::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

/// The operation that raised a [`CalcError`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// [`BasicCalculator::add`](crate::BasicCalculator::add).
    Add,
    /// [`BasicCalculator::subtract`](crate::BasicCalculator::subtract).
    Subtract,
    /// [`BasicCalculator::multiply`](crate::BasicCalculator::multiply).
    Multiply,
    /// [`BasicCalculator::divide`](crate::BasicCalculator::divide).
    Divide,
    /// [`math::factorial`](crate::math::factorial).
    Factorial,
    /// [`math::power`](crate::math::power).
    Power,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Add => f.write_str("addition"),
            Operation::Subtract => f.write_str("subtraction"),
            Operation::Multiply => f.write_str("multiplication"),
            Operation::Divide => f.write_str("division"),
            Operation::Factorial => f.write_str("factorial"),
            Operation::Power => f.write_str("power"),
        }
    }
}

/// An error indicating that an operation could not produce a result.
///
/// The calculator's registers are never modified by an operation that
/// returns an error.
///
/// Only the combinations of kind and operation that some operation can
/// actually raise are valid; deserializing any other combination fails.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalcError"))]
pub struct CalcError {
    kind: ErrorKind,
    operation: Operation,
}

impl CalcError {
    pub(crate) fn new(kind: ErrorKind, operation: Operation) -> CalcError {
        CalcError { kind, operation }
    }

    pub(crate) fn domain(operation: Operation) -> CalcError {
        CalcError::new(ErrorKind::Domain, operation)
    }

    pub(crate) fn overflow(operation: Operation) -> CalcError {
        CalcError::new(ErrorKind::Overflow, operation)
    }

    pub(crate) fn division_by_zero() -> CalcError {
        CalcError::new(ErrorKind::DivisionByZero, Operation::Divide)
    }

    /// Reports whether `operation` can raise a condition of kind `kind`.
    fn can_raise(kind: ErrorKind, operation: Operation) -> bool {
        match kind {
            ErrorKind::Domain => matches!(operation, Operation::Factorial | Operation::Power),
            ErrorKind::Overflow => matches!(
                operation,
                Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Factorial
            ),
            ErrorKind::DivisionByZero => operation == Operation::Divide,
        }
    }

    /// Returns the kind of condition that was raised.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the operation that raised the condition.
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.kind, self.operation) {
            (ErrorKind::Domain, Operation::Factorial) => {
                f.write_str("factorial undefined for negative numbers")
            }
            (ErrorKind::Domain, Operation::Power) => {
                f.write_str("cannot raise zero to a negative power")
            }
            (ErrorKind::Overflow, Operation::Factorial) => {
                f.write_str("factorial too large for double precision")
            }
            (ErrorKind::DivisionByZero, _) => f.write_str("division by zero"),
            (kind, operation) => write!(f, "{} {}", operation, kind),
        }
    }
}

impl Error for CalcError {}

/// The unvalidated wire form of a [`CalcError`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "CalcError")]
struct RawCalcError {
    kind: ErrorKind,
    operation: Operation,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalcError> for CalcError {
    type Error = String;

    fn try_from(raw: RawCalcError) -> Result<CalcError, String> {
        if CalcError::can_raise(raw.kind, raw.operation) {
            Ok(CalcError::new(raw.kind, raw.operation))
        } else {
            Err(format!("{} cannot raise {}", raw.operation, raw.kind))
        }
    }
}
