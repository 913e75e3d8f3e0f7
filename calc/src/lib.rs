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

//! calc is a small binary floating-point arithmetic engine.
//!
//! # Introduction
//!
//! Binary floating-point arithmetic never fails outright: a sum that is too
//! large silently becomes infinity, and a division by zero silently becomes
//! infinity or NaN. calc wraps the four basic operations in a policy that
//! turns these conditions into errors, and pairs them with a handful of
//! checked numeric helpers.
//!
//! # Details
//!
//! The main items exposed by this library are as follows:
//!
//!  * [`BasicCalculator`], which performs addition, subtraction,
//!    multiplication and division, remembers the last successful result, and
//!    provides a one-register memory.
//!
//!  * The [`math`] module, which hosts stateless helpers: epsilon
//!    comparisons, factorial, integer powers, angle conversion, and argument
//!    validation for logarithms and square roots.
//!
//!  * [`CalcError`], which describes why an operation failed. Callers branch
//!    on its [`ErrorKind`].
//!
//! A failed operation never modifies a calculator's registers.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! use calc::{BasicCalculator, ErrorKind};
//!
//! let mut calc = BasicCalculator::new();
//! assert_eq!(calc.add(1.5, 2.5)?, 4.0);
//!
//! let err = calc.add(f64::MAX, f64::MAX).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Overflow);
//! assert_eq!(calc.last_result(), 4.0);
//!
//! # Ok::<_, Box<dyn Error>>(())
//! ```

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use static_assertions::assert_impl_all;

mod calculator;
mod error;
pub mod math;

pub use calculator::BasicCalculator;
pub use error::{CalcError, ErrorKind, Operation};

assert_impl_all!(BasicCalculator: Send, Sync, Clone, Default);
assert_impl_all!(CalcError: std::error::Error, Send, Sync, Copy);
