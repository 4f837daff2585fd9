//! Rule builders for a single field value.

use regex::Regex;

use super::verdict::Verdict;

/// Prefix for messages that list several unmet requirements.
const NEEDS_PREFIX: &str = "Need: ";

/// First-failure-wins rule chain.
///
/// Rules run in the order they are added; once one fails, later rules are
/// skipped and the failing rule's message becomes the verdict.
///
/// # Example
///
/// ```
/// use intake_lib::validation::RuleChain;
///
/// let verdict = RuleChain::new("x")
///     .required("City is required")
///     .min_length(2, "At least 2 characters")
///     .verdict();
///
/// assert_eq!(verdict.message(), "At least 2 characters");
/// ```
#[derive(Debug)]
pub struct RuleChain<'a> {
    value: &'a str,
    failure: Option<String>,
}

impl<'a> RuleChain<'a> {
    /// Start a chain over an already-normalized value.
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            failure: None,
        }
    }

    /// Add a custom rule. `check` returns true when the value is acceptable.
    pub fn rule<F>(mut self, check: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&str) -> bool,
    {
        if self.failure.is_none() && !check(self.value) {
            self.failure = Some(msg.into());
        }
        self
    }

    /// Require the value to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a pattern.
    pub fn pattern(self, re: &Regex, msg: impl Into<String>) -> Self {
        self.rule(|v| re.is_match(v), msg)
    }

    /// Require the value to equal another value byte-for-byte.
    pub fn equals(self, other: &str, msg: impl Into<String>) -> Self {
        self.rule(|v| v == other, msg)
    }

    /// Finish with the checkmark on success.
    pub fn verdict(self) -> Verdict {
        match self.failure {
            Some(msg) => Verdict::fail(msg),
            None => Verdict::pass(),
        }
    }

    /// Finish with a custom message on success.
    pub fn verdict_or(self, success: &str) -> Verdict {
        match self.failure {
            Some(msg) => Verdict::fail(msg),
            None => Verdict::pass_with(success),
        }
    }
}

/// Collect-all requirement list.
///
/// Every requirement is evaluated; the verdict lists all the unmet ones.
#[derive(Debug, Default)]
pub struct Needs {
    problems: Vec<&'static str>,
}

impl Needs {
    /// Create an empty requirement list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `need` unless `met` is true.
    pub fn require(&mut self, met: bool, need: &'static str) -> &mut Self {
        if !met {
            self.problems.push(need);
        }
        self
    }

    /// `"Need: a, b"` when anything is unmet, the checkmark otherwise.
    pub fn verdict(&self) -> Verdict {
        if self.problems.is_empty() {
            Verdict::pass()
        } else {
            Verdict::fail(format!("{}{}", NEEDS_PREFIX, self.problems.join(", ")))
        }
    }
}
