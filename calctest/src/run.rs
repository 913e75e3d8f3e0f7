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

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use calc::{math, BasicCalculator, CalcError};
use tracing::{debug, info};

use crate::ast;

pub enum Outcome {
    Passed,
    Failed { cause: Box<dyn Error> },
}

pub trait Report {
    fn start_file(&mut self, file: &ast::File);
    fn finish_file(&mut self);
    fn start_test(&mut self, test: &ast::Test);
    fn finish_test(&mut self, outcome: Outcome);
}

/// The state shared by every test case in one file.
struct Session {
    calc: BasicCalculator,
    epsilon: f64,
    tolerance: f64,
}

impl Session {
    fn new() -> Session {
        Session {
            calc: BasicCalculator::new(),
            epsilon: math::DEFAULT_EPSILON,
            tolerance: 0.0,
        }
    }
}

/// The value produced by an operation.
enum Value {
    Number(f64),
    Bool(bool),
    None,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{:?}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::None => f.write_str("?"),
        }
    }
}

pub fn run_file<R>(reporter: &mut R, file: &ast::File) -> Result<(), Box<dyn Error>>
where
    R: Report,
{
    info!(path = %file.path.display(), "running file");
    reporter.start_file(file);
    let mut session = Session::new();
    for line in &file.lines {
        match line {
            ast::Line::Directive(directive) => run_directive(&mut session, reporter, directive)?,
            ast::Line::Test(test) => run_test(&mut session, reporter, test),
        }
    }
    reporter.finish_file();
    Ok(())
}

fn run_directive<R>(
    session: &mut Session,
    reporter: &mut R,
    directive: &ast::Directive,
) -> Result<(), Box<dyn Error>>
where
    R: Report,
{
    debug!(%directive, "applying directive");
    match directive {
        ast::Directive::CalcTest(file) => run_file(reporter, file)?,
        ast::Directive::Epsilon(e) => session.epsilon = *e,
        ast::Directive::Tolerance(t) => session.tolerance = *t,
        ast::Directive::Version(_) => (),
    }
    Ok(())
}

fn run_test<R>(session: &mut Session, reporter: &mut R, test: &ast::Test)
where
    R: Report,
{
    reporter.start_test(test);
    let outcome = match run_test_inner(session, test) {
        Ok(()) => Outcome::Passed,
        Err(cause) => Outcome::Failed { cause },
    };
    if let Outcome::Failed { cause } = &outcome {
        debug!(id = %test.id, %cause, "test failed");
    }
    reporter.finish_test(outcome);
}

fn run_test_inner(session: &mut Session, test: &ast::Test) -> Result<(), Box<dyn Error>> {
    let result = evaluate(session, &test.operation)?;
    match result {
        Ok(value) => {
            if let Some(condition) = test.conditions.first() {
                return Err(format!("got {} but expected condition {}", value, condition).into());
            }
            check_result(session, &test.result, &value)
        }
        Err(e) => {
            let raised = ast::Condition::from_error_kind(e.kind());
            if test.conditions.len() != 1 || test.conditions[0] != raised {
                let expected: Vec<_> = test.conditions.iter().map(|c| c.to_string()).collect();
                return Err(format!(
                    "raised {} ({}) but expected conditions [{}]",
                    raised,
                    e,
                    expected.join(", ")
                )
                .into());
            }
            check_result(session, &test.result, &Value::None)
        }
    }
}

/// Runs one operation. The outer result reports malformed operands; the
/// inner result is the operation's own outcome.
fn evaluate(
    session: &mut Session,
    operation: &ast::Operation,
) -> Result<Result<Value, CalcError>, Box<dyn Error>> {
    let calc = &mut session.calc;
    let epsilon = session.epsilon;
    let number = |n: f64| -> Result<Value, CalcError> { Ok(Value::Number(n)) };
    let boolean = |b: bool| -> Result<Value, CalcError> { Ok(Value::Bool(b)) };
    Ok(match operation {
        ast::Operation::Add(a, b) => calc
            .add(parse_number(a)?, parse_number(b)?)
            .map(Value::Number),
        ast::Operation::Subtract(a, b) => calc
            .subtract(parse_number(a)?, parse_number(b)?)
            .map(Value::Number),
        ast::Operation::Multiply(a, b) => calc
            .multiply(parse_number(a)?, parse_number(b)?)
            .map(Value::Number),
        ast::Operation::Divide(a, b) => calc
            .divide(parse_number(a)?, parse_number(b)?)
            .map(Value::Number),
        ast::Operation::Factorial(n) => math::factorial(n.parse()?).map(Value::Number),
        ast::Operation::Power(base, exponent) => {
            math::power(parse_number(base)?, exponent.parse()?).map(Value::Number)
        }
        ast::Operation::IsZero(v) => boolean(math::is_zero_within(parse_number(v)?, epsilon)),
        ast::Operation::AreEqual(a, b) => boolean(math::are_equal_within(
            parse_number(a)?,
            parse_number(b)?,
            epsilon,
        )),
        ast::Operation::DegreeToRadian(v) => number(math::degree_to_radian(parse_number(v)?)),
        ast::Operation::RadianToDegree(v) => number(math::radian_to_degree(parse_number(v)?)),
        ast::Operation::IsFinite(v) => boolean(math::is_finite(parse_number(v)?)),
        ast::Operation::IsValidForLog(v) => boolean(math::is_valid_for_log(parse_number(v)?)),
        ast::Operation::IsValidForSqrt(v) => boolean(math::is_valid_for_sqrt(parse_number(v)?)),
        ast::Operation::MemoryStore(v) => {
            calc.memory_store(parse_number(v)?);
            Ok(Value::None)
        }
        ast::Operation::MemoryRecall => number(calc.memory_recall()),
        ast::Operation::MemoryClear => {
            calc.memory_clear();
            Ok(Value::None)
        }
        ast::Operation::Clear => {
            calc.clear();
            Ok(Value::None)
        }
        ast::Operation::LastResult => number(calc.last_result()),
    })
}

/// Parses a numeric operand or result.
///
/// Besides the syntax accepted by `f64::from_str`, a `#` followed by sixteen
/// hex digits gives the big-endian IEEE 754 encoding of the number.
pub fn parse_number(s: &str) -> Result<f64, Box<dyn Error>> {
    if let Some(digits) = s.strip_prefix('#') {
        let bytes = hex::decode(digits)?;
        let bytes = <[u8; 8]>::try_from(bytes.as_slice()).map_err(|_| {
            format!("incorrect byte literal with {} bytes", bytes.len())
        })?;
        Ok(f64::from_bits(u64::from_be_bytes(bytes)))
    } else {
        Ok(s.parse()?)
    }
}

fn check_result(session: &Session, expected: &str, actual: &Value) -> Result<(), Box<dyn Error>> {
    let matches = match actual {
        Value::None => expected == "?",
        Value::Bool(b) => match expected {
            "true" => *b,
            "false" => !*b,
            _ => false,
        },
        Value::Number(n) if expected != "?" => {
            let e = parse_number(expected)?;
            (e.is_nan() && n.is_nan())
                || e == *n
                || (session.tolerance > 0.0 && math::are_equal_within(e, *n, session.tolerance))
        }
        Value::Number(_) => false,
    };
    if matches {
        Ok(())
    } else {
        Err(format!("got {} but expected {}", actual, expected).into())
    }
}
