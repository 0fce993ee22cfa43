//! Contact form field validators.
//!
//! Each validator returns `Ok(())` or the exact message shown under the
//! field. The rule set is fixed: name, email, message, in that order.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::view::FormSnapshot;

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const NAME_ERROR: &str = "Please enter your name";
pub const EMAIL_ERROR: &str = "Please enter a valid email";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

// Minimum lengths in UTF-16 code units, the unit browsers report for input values.
const NAME_MIN_UNITS: usize = 2;
const MESSAGE_MIN_UNITS: usize = 10;

/// Shape check only: something@something.something, unanchored.
static EMAIL_SHAPE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+"));

/// Outcome of a single field check.
pub type FieldResult = Result<(), &'static str>;

/// Strip leading and trailing whitespace the way `String.prototype.trim` does.
///
/// Differs from [`str::trim`] on two code points: U+FEFF (byte order mark)
/// is stripped, U+0085 (next line) is kept.
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Length of `value` after [`trim_form_value`], in UTF-16 code units.
#[must_use]
pub fn trimmed_len(value: &str) -> usize {
    trim_form_value(value).encode_utf16().count()
}

pub fn validate_name(value: &str) -> FieldResult {
    if trimmed_len(value) >= NAME_MIN_UNITS { Ok(()) } else { Err(NAME_ERROR) }
}

pub fn validate_email(value: &str) -> FieldResult {
    match &*EMAIL_SHAPE {
        Ok(re) if re.is_match(value) => Ok(()),
        Ok(_) => Err(EMAIL_ERROR),
        Err(e) => {
            log::warn!("email pattern failed to compile: {e}");
            Err(EMAIL_ERROR)
        }
    }
}

pub fn validate_message(value: &str) -> FieldResult {
    if trimmed_len(value) >= MESSAGE_MIN_UNITS { Ok(()) } else { Err(MESSAGE_ERROR) }
}

/// A named form field and its check.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: fn(&str) -> FieldResult,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule").field("field", &self.field).finish_non_exhaustive()
    }
}

/// Ordered validator set, built once at startup.
#[derive(Clone, Debug)]
pub struct FieldValidators {
    rules: Vec<FieldRule>,
}

impl Default for FieldValidators {
    fn default() -> Self {
        Self::contact()
    }
}

impl FieldValidators {
    /// The contact form's rules.
    #[must_use]
    pub fn contact() -> Self {
        Self {
            rules: vec![
                FieldRule { field: "name", check: validate_name },
                FieldRule { field: "email", check: validate_email },
                FieldRule { field: "message", check: validate_message },
            ],
        }
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.field).collect()
    }

    /// Run every rule against `snapshot`. Never stops at the first failure.
    pub fn validate(&self, snapshot: &FormSnapshot) -> ValidationReport {
        let results = self.rules.iter().map(|rule| (rule.field, (rule.check)(snapshot.get(rule.field)))).collect();
        ValidationReport { results }
    }
}

/// Per-field results of one submission attempt, in rule order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<(&'static str, FieldResult)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    pub fn results(&self) -> &[(&'static str, FieldResult)] {
        &self.results
    }

    /// Field names with their error messages, in rule order.
    pub fn errors(&self) -> Vec<(&'static str, &'static str)> {
        self.results.iter().filter_map(|(field, result)| result.err().map(|msg| (*field, msg))).collect()
    }

    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.results.iter().find(|(name, _)| *name == field).and_then(|(_, result)| result.err())
    }
}
