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
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::ast;
use crate::lex::Tokens;

struct Context<'a> {
    path: &'a Path,
}

pub fn parse_file(path: &Path) -> Result<ast::File, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    parse_str(path, &contents)
}

/// Parses `contents` as though it had been read from `path`.
///
/// `path` is used only to resolve `calctest:` includes.
pub fn parse_str(path: &Path, contents: &str) -> Result<ast::File, Box<dyn Error>> {
    let cx = &Context { path };
    let mut lines = vec![];
    for (i, line) in contents.lines().enumerate() {
        let mut tokens = Tokens::new(line);
        match parse_line(cx, &mut tokens) {
            Ok(None) => (),
            Ok(Some(line)) => lines.push(line),
            Err(e) => return Err(format!("parsing line {}: {}", i + 1, e).into()),
        }
    }
    Ok(ast::File {
        path: path.to_path_buf(),
        lines,
    })
}

fn parse_line(cx: &Context, tokens: &mut Tokens) -> Result<Option<ast::Line>, Box<dyn Error>> {
    let token = match tokens.next() {
        None => return Ok(None),
        Some(token) => token,
    };
    if let Some(keyword) = token.strip_suffix(':') {
        let value = require_token(tokens, "value")?;
        Ok(Some(ast::Line::Directive(parse_directive(
            cx, keyword, value,
        )?)))
    } else {
        let id = token;
        let operation = parse_operation(tokens)?;
        if require_token(tokens, "->")? != "->" {
            return Err("missing \"->\" token".into());
        }
        let result = require_token(tokens, "result")?;
        let mut conditions = vec![];
        for condition in tokens {
            conditions.push(condition.parse()?);
        }
        Ok(Some(ast::Line::Test(ast::Test {
            id,
            operation,
            result,
            conditions,
        })))
    }
}

fn require_token(tokens: &mut Tokens, name: &str) -> Result<String, Box<dyn Error>> {
    tokens
        .next()
        .ok_or_else(|| format!("missing \"{}\" token", name).into())
}

fn parse_directive(
    cx: &Context,
    keyword: &str,
    value: String,
) -> Result<ast::Directive, Box<dyn Error>> {
    match keyword.to_lowercase().as_str() {
        "calctest" => {
            let path = cx.path.with_file_name(value).with_extension("calcTest");
            let file =
                parse_file(&path).map_err(|e| format!("opening {}: {}", path.display(), e))?;
            Ok(ast::Directive::CalcTest(file))
        }
        "epsilon" => Ok(ast::Directive::Epsilon(parse_tolerance(&value)?)),
        "tolerance" => Ok(ast::Directive::Tolerance(parse_tolerance(&value)?)),
        "version" => Ok(ast::Directive::Version(value)),
        _ => Err(format!("unknown directive \"{}\"", keyword).into()),
    }
}

fn parse_tolerance(s: &str) -> Result<f64, Box<dyn Error>> {
    let t: f64 = s.parse()?;
    if !(t >= 0.0 && t.is_finite()) {
        return Err(format!("invalid tolerance \"{}\"", s).into());
    }
    Ok(t)
}

fn parse_operation(tokens: &mut Tokens) -> Result<ast::Operation, Box<dyn Error>> {
    let operation = require_token(tokens, "operation")?;
    let mut op = || require_token(tokens, "operand");
    match operation.to_lowercase().as_str() {
        "add" => Ok(ast::Operation::Add(op()?, op()?)),
        "subtract" => Ok(ast::Operation::Subtract(op()?, op()?)),
        "multiply" => Ok(ast::Operation::Multiply(op()?, op()?)),
        "divide" => Ok(ast::Operation::Divide(op()?, op()?)),
        "factorial" => Ok(ast::Operation::Factorial(op()?)),
        "power" => Ok(ast::Operation::Power(op()?, op()?)),
        "iszero" => Ok(ast::Operation::IsZero(op()?)),
        "areequal" => Ok(ast::Operation::AreEqual(op()?, op()?)),
        "degtorad" => Ok(ast::Operation::DegreeToRadian(op()?)),
        "radtodeg" => Ok(ast::Operation::RadianToDegree(op()?)),
        "isfinite" => Ok(ast::Operation::IsFinite(op()?)),
        "validlog" => Ok(ast::Operation::IsValidForLog(op()?)),
        "validsqrt" => Ok(ast::Operation::IsValidForSqrt(op()?)),
        "mstore" => Ok(ast::Operation::MemoryStore(op()?)),
        "mrecall" => Ok(ast::Operation::MemoryRecall),
        "mclear" => Ok(ast::Operation::MemoryClear),
        "clear" => Ok(ast::Operation::Clear),
        "lastresult" => Ok(ast::Operation::LastResult),
        _ => Err(format!("unknown operation \"{}\"", operation).into()),
    }
}

impl FromStr for ast::Condition {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<ast::Condition, Box<dyn Error>> {
        match s.to_lowercase().as_str() {
            "division_by_zero" => Ok(ast::Condition::DivisionByZero),
            "domain_error" => Ok(ast::Condition::DomainError),
            "overflow" => Ok(ast::Condition::Overflow),
            _ => Err(format!("unknown condition \"{}\"", s).into()),
        }
    }
}
