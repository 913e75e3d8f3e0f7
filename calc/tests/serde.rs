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

use serde_json::json;
use serde_test::{assert_de_tokens_error, assert_ser_tokens, assert_tokens, Token};

use calc::{math, BasicCalculator, CalcError, ErrorKind, Operation};

#[test]
fn test_serde_calculator() {
    let mut calc = BasicCalculator::new();
    calc.memory_store(7.0);
    calc.divide(10.0, 4.0).unwrap();

    assert_tokens(
        &calc,
        &[
            Token::Struct {
                name: "BasicCalculator",
                len: 2,
            },
            Token::Str("memory"),
            Token::F64(7.0),
            Token::Str("last_result"),
            Token::F64(2.5),
            Token::StructEnd,
        ],
    );

    let restored: BasicCalculator =
        serde_json::from_value(json!({"memory": 7.0, "last_result": 2.5}))
            .expect("deserialization works");
    assert_eq!(restored, calc);
    assert_eq!(restored.memory_recall(), 7.0);
    assert_eq!(restored.last_result(), 2.5);
}

#[test]
fn test_serde_error() {
    let err = math::factorial(-3).unwrap_err();

    assert_tokens(
        &err,
        &[
            Token::Struct {
                name: "CalcError",
                len: 2,
            },
            Token::Str("kind"),
            Token::UnitVariant {
                name: "ErrorKind",
                variant: "Domain",
            },
            Token::Str("operation"),
            Token::UnitVariant {
                name: "Operation",
                variant: "Factorial",
            },
            Token::StructEnd,
        ],
    );

    let json = serde_json::to_value(BasicCalculator::new().divide(1.0, 0.0).unwrap_err())
        .expect("serialization works");
    assert_eq!(json, json!({"kind": "DivisionByZero", "operation": "Divide"}));

    let err: CalcError = serde_json::from_value(json).expect("deserialization works");
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.operation(), Operation::Divide);
}

#[test]
fn test_serde_rejects_unknown_kind() {
    let res = serde_json::from_value::<CalcError>(json!({"kind": "Underflow", "operation": "Add"}));
    assert!(res.is_err());
}

#[test]
fn test_serde_rejects_impossible_error() {
    for (kind, operation) in &[
        ("DivisionByZero", "Factorial"),
        ("Domain", "Add"),
        ("Overflow", "Divide"),
        ("Overflow", "Power"),
    ] {
        println!("{} {}", kind, operation);
        let json = json!({"kind": kind, "operation": operation});
        assert!(serde_json::from_value::<CalcError>(json).is_err());
    }

    let res = serde_json::from_value::<CalcError>(
        json!({"kind": "DivisionByZero", "operation": "Factorial"}),
    );
    assert_eq!(res.unwrap_err().to_string(), "factorial cannot raise division by zero");

    for (kind, operation) in &[
        ("Domain", "Factorial"),
        ("Domain", "Power"),
        ("Overflow", "Add"),
        ("Overflow", "Subtract"),
        ("Overflow", "Multiply"),
        ("Overflow", "Factorial"),
        ("DivisionByZero", "Divide"),
    ] {
        println!("{} {}", kind, operation);
        let json = json!({"kind": kind, "operation": operation});
        let err: CalcError = serde_json::from_value(json.clone()).expect("deserialization works");
        assert_eq!(serde_json::to_value(err).expect("serialization works"), json);
    }
}

#[test]
fn test_serde_non_finite_registers() {
    let mut calc = BasicCalculator::new();
    calc.divide(f64::MAX, 0.5).unwrap();
    assert_eq!(calc.last_result(), f64::INFINITY);

    assert_tokens(
        &calc,
        &[
            Token::Struct {
                name: "BasicCalculator",
                len: 2,
            },
            Token::Str("memory"),
            Token::F64(0.0),
            Token::Str("last_result"),
            Token::Str("#7ff0000000000000"),
            Token::StructEnd,
        ],
    );

    let json = serde_json::to_string(&calc).expect("serialization works");
    let restored: BasicCalculator = serde_json::from_str(&json).expect("deserialization works");
    assert_eq!(restored, calc);

    calc.multiply(0.0, f64::INFINITY).unwrap();
    calc.memory_store(f64::NEG_INFINITY);
    let json = serde_json::to_string(&calc).expect("serialization works");
    let restored: BasicCalculator = serde_json::from_str(&json).expect("deserialization works");
    assert!(restored.last_result().is_nan());
    assert_eq!(restored.last_result().to_bits(), calc.last_result().to_bits());
    assert_eq!(restored.memory_recall(), f64::NEG_INFINITY);

    let mut calc = BasicCalculator::new();
    calc.memory_store(f64::NAN);
    assert_ser_tokens(
        &calc,
        &[
            Token::Struct {
                name: "BasicCalculator",
                len: 2,
            },
            Token::Str("memory"),
            Token::Str("#7ff8000000000000"),
            Token::Str("last_result"),
            Token::F64(0.0),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_serde_rejects_malformed_register() {
    for value in &["#123", "7ff0000000000000", "#7ff000000000000g", "inf"] {
        println!("{}", value);
        let res =
            serde_json::from_value::<BasicCalculator>(json!({"memory": value, "last_result": 0.0}));
        assert!(res.is_err());
    }

    assert_de_tokens_error::<BasicCalculator>(
        &[
            Token::Struct {
                name: "BasicCalculator",
                len: 2,
            },
            Token::Str("memory"),
            Token::Str("#123"),
        ],
        "invalid register value \"#123\"",
    );
}
