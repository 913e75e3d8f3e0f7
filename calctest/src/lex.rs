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

use std::iter::Peekable;
use std::str::Chars;

/// Splits one line of a script into whitespace-separated tokens.
///
/// A token may be quoted with `'` or `"`; a doubled quote inside a quoted
/// token stands for the quote character itself. An unquoted `--` starts a
/// comment that runs to the end of the line.
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Tokens<'a> {
        Tokens {
            chars: line.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn quoted(&mut self, quote: char) -> String {
        let mut token = String::new();
        while let Some(ch) = self.chars.next() {
            if ch != quote {
                token.push(ch);
            } else if self.chars.peek() == Some(&quote) {
                token.push(quote);
                self.chars.next();
            } else {
                break;
            }
        }
        token
    }

    fn unquoted(&mut self) -> Option<String> {
        let mut token = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            if ch == '-' && token.is_empty() {
                self.chars.next();
                if self.chars.peek() == Some(&'-') {
                    // Comment; drain the rest of the line.
                    self.chars.by_ref().for_each(drop);
                    return None;
                }
                token.push('-');
                continue;
            }
            token.push(ch);
            self.chars.next();
        }
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.skip_whitespace();
        match self.chars.peek() {
            Some(&quote) if quote == '\'' || quote == '"' => {
                self.chars.next();
                Some(self.quoted(quote))
            }
            _ => self.unquoted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tokens;

    fn tokens(line: &str) -> Vec<String> {
        Tokens::new(line).collect()
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("add001 add 1 -2 -> -1"), vec!["add001", "add", "1", "-2", "->", "-1"]);
        assert_eq!(tokens("  version:\t1  "), vec!["version:", "1"]);
        assert_eq!(
            tokens("mul001 multiply 2 3 -> 6 -- six"),
            vec!["mul001", "multiply", "2", "3", "->", "6"]
        );
        assert_eq!(tokens("-- whole line"), Vec::<String>::new());
        assert_eq!(tokens(""), Vec::<String>::new());
        assert_eq!(tokens("x 'a b' \"it''s\" 'it''s'"), vec!["x", "a b", "it''s", "it's"]);
    }
}
