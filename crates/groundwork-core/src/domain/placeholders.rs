//! Ordered literal placeholder substitution.
//!
//! Replacements are plain substring substitutions, not template evaluation.
//! They are applied in insertion order: replacements could collide (one
//! replacement's output containing another's token), so the order must be
//! deterministic and documented at the call site.

/// An ordered set of literal (token, replacement) pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSet {
    replacements: Vec<(String, String)>,
}

impl PlaceholderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacement; applied after all previously pushed pairs.
    pub fn push(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.replacements.push((token.into(), value.into()));
        self
    }

    /// Apply every replacement to `text`, in insertion order.
    pub fn apply(&self, text: &str) -> String {
        self.replacements
            .iter()
            .fold(text.to_string(), |acc, (token, value)| {
                acc.replace(token.as_str(), value)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}
