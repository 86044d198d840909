use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::primitives::Checked;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One advisory repair note produced while validating a document.
///
/// Issues are data, never errors: the validator always returns a usable
/// config and reports what it changed alongside it.
pub struct Issue {
    /// Dotted field path, e.g. `"backgrounds[0].xPct"`.
    pub field: String,
    /// What was wrong and what the validator substituted.
    pub message: String,
}

impl Issue {
    /// Build an issue for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered collection of [`Issue`]s for one validation pass.
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Record an issue for `field`.
    pub fn note(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(field, message));
    }

    /// Unwrap a checked value, absorbing its issues into this report.
    pub fn absorb<T>(&mut self, checked: Checked<T>) -> T {
        self.issues.extend(checked.issues);
        checked.value
    }

    /// Append every issue from `other`.
    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the document validated without repairs.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate over recorded issues in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }
}

impl Extend<Issue> for ValidationReport {
    fn extend<I: IntoIterator<Item = Issue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationReport {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
