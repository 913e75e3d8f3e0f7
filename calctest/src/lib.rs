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

//! A runner for `.calcTest` conformance scripts.
//!
//! A script is a sequence of directives (`keyword: value`) and test cases
//! (`id operation operands... -> result conditions...`). Every test case in
//! a file runs against the same [`calc::BasicCalculator`], so a script can
//! observe how each operation leaves the calculator's registers.

pub mod ast;
pub mod lex;
pub mod parse;
pub mod run;
