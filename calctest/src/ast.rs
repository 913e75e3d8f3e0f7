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

use std::fmt;
use std::path::PathBuf;

use calc::ErrorKind;

#[derive(Debug)]
pub struct File {
    pub path: PathBuf,
    pub lines: Vec<Line>,
}

#[derive(Debug)]
pub enum Line {
    Directive(Directive),
    Test(Test),
}

#[derive(Debug)]
pub enum Directive {
    CalcTest(File),
    Epsilon(f64),
    Tolerance(f64),
    Version(String),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Directive::CalcTest(file) => write!(f, "calctest: {}", file.path.display()),
            Directive::Epsilon(e) => write!(f, "epsilon: {}", e),
            Directive::Tolerance(t) => write!(f, "tolerance: {}", t),
            Directive::Version(v) => write!(f, "version: {}", v),
        }
    }
}

#[derive(Debug)]
pub struct Test {
    pub id: String,
    pub operation: Operation,
    pub result: String,
    pub conditions: Vec<Condition>,
}

#[derive(Debug)]
pub enum Operation {
    Add(String, String),
    Subtract(String, String),
    Multiply(String, String),
    Divide(String, String),
    Factorial(String),
    Power(String, String),
    IsZero(String),
    AreEqual(String, String),
    DegreeToRadian(String),
    RadianToDegree(String),
    IsFinite(String),
    IsValidForLog(String),
    IsValidForSqrt(String),
    MemoryStore(String),
    MemoryRecall,
    MemoryClear,
    Clear,
    LastResult,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Add(op1, op2) => write!(f, "add {} {}", op1, op2),
            Operation::Subtract(op1, op2) => write!(f, "subtract {} {}", op1, op2),
            Operation::Multiply(op1, op2) => write!(f, "multiply {} {}", op1, op2),
            Operation::Divide(op1, op2) => write!(f, "divide {} {}", op1, op2),
            Operation::Factorial(op) => write!(f, "factorial {}", op),
            Operation::Power(op1, op2) => write!(f, "power {} {}", op1, op2),
            Operation::IsZero(op) => write!(f, "iszero {}", op),
            Operation::AreEqual(op1, op2) => write!(f, "areequal {} {}", op1, op2),
            Operation::DegreeToRadian(op) => write!(f, "degtorad {}", op),
            Operation::RadianToDegree(op) => write!(f, "radtodeg {}", op),
            Operation::IsFinite(op) => write!(f, "isfinite {}", op),
            Operation::IsValidForLog(op) => write!(f, "validlog {}", op),
            Operation::IsValidForSqrt(op) => write!(f, "validsqrt {}", op),
            Operation::MemoryStore(op) => write!(f, "mstore {}", op),
            Operation::MemoryRecall => f.write_str("mrecall"),
            Operation::MemoryClear => f.write_str("mclear"),
            Operation::Clear => f.write_str("clear"),
            Operation::LastResult => f.write_str("lastresult"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Condition {
    DivisionByZero,
    DomainError,
    Overflow,
}

impl Condition {
    pub fn from_error_kind(kind: ErrorKind) -> Condition {
        match kind {
            ErrorKind::Domain => Condition::DomainError,
            ErrorKind::Overflow => Condition::Overflow,
            ErrorKind::DivisionByZero => Condition::DivisionByZero,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Condition::DivisionByZero => f.write_str("DivisionByZero"),
            Condition::DomainError => f.write_str("DomainError"),
            Condition::Overflow => f.write_str("Overflow"),
        }
    }
}
