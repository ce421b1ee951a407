//! Call-site pattern — which text counts as a function call.
//!
//! The default pattern finds method calls on `self` (`self.name(`). Any
//! regular expression can replace it. When the expression has a capture
//! group, the first group is taken as the call text; otherwise the whole
//! match is. Unless `no_parenthesis` is set, the last character of the call
//! text (normally the opening parenthesis) is dropped to form the name.

use regex::Regex;

use crate::error::{Result, UsageError};

/// Pattern used when no override is given.
pub fn default_pattern() -> String {
    format!(
        "{}({}{})",
        regex::escape("self."),
        "[a-zA-Z0-9_]+",
        regex::escape("(")
    )
}

/// A compiled call-site pattern plus its name-derivation rule.
#[derive(Debug, Clone)]
pub struct CallPattern {
    regex: Regex,
    no_parenthesis: bool,
}

impl CallPattern {
    /// Compile `pattern`, or the default pattern when `None`.
    ///
    /// The override is not checked for shape; a pattern that never ends in
    /// `(` still loses its last character unless `no_parenthesis` is set.
    pub fn new(pattern: Option<&str>, no_parenthesis: bool) -> Result<Self> {
        let source = match pattern {
            Some(p) => p.to_string(),
            None => default_pattern(),
        };
        let regex = Regex::new(&source).map_err(|source_err| UsageError::InvalidPattern {
            pattern: source.clone(),
            source: source_err,
        })?;
        Ok(Self {
            regex,
            no_parenthesis,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn no_parenthesis(&self) -> bool {
        self.no_parenthesis
    }

    /// Every function name called in `content`, one per non-overlapping
    /// match, in match order.
    pub fn function_names<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let calls: Vec<&'a str> = if self.regex.captures_len() > 1 {
            self.regex
                .captures_iter(content)
                .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
                .collect()
        } else {
            self.regex.find_iter(content).map(|m| m.as_str()).collect()
        };

        if self.no_parenthesis {
            calls
        } else {
            calls.into_iter().map(strip_last_char).collect()
        }
    }
}

impl Default for CallPattern {
    fn default() -> Self {
        Self {
            regex: Regex::new(&default_pattern()).expect("default pattern is valid"),
            no_parenthesis: false,
        }
    }
}

fn strip_last_char(call: &str) -> &str {
    match call.char_indices().next_back() {
        Some((idx, _)) => &call[..idx],
        None => call,
    }
}
