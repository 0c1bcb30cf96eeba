//! Label vocabulary and label-derivation policy
//!
//! A `LabelSet` is the fixed, ordered, closed set of classification
//! outcomes. Order matters: argmax indices map back to tokens through it,
//! and per-class metrics are reported in set order.

use crate::error::{Error, Result};

/// Fixed, ordered set of label tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    tokens: Vec<String>,
}

impl LabelSet {
    /// The binary label set `["0", "1"]`.
    #[must_use]
    pub fn binary() -> Self {
        Self {
            tokens: vec!["0".to_string(), "1".to_string()],
        }
    }

    /// Create a label set from ordered tokens.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLabelSet` if the set is empty or contains
    /// duplicate tokens.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(Error::InvalidLabelSet("label set must not be empty".into()));
        }
        for (i, token) in tokens.iter().enumerate() {
            if tokens[..i].contains(token) {
                return Err(Error::InvalidLabelSet(format!(
                    "duplicate label token: {token:?}"
                )));
            }
        }
        Ok(Self { tokens })
    }

    /// Number of labels in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a class index.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Class index of a token.
    #[must_use]
    pub fn index(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    /// Map a sequence of tokens to class indices.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLabel` for any token outside the set.
    pub fn indices<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<usize>> {
        tokens
            .iter()
            .map(|t| {
                self.index(t.as_ref()).ok_or_else(|| Error::UnknownLabel {
                    token: t.as_ref().to_string(),
                })
            })
            .collect()
    }

    /// Iterate tokens in class order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::binary()
    }
}

/// Policy for deriving a binary label token from a raw submission field.
///
/// A field maps to `"1"` iff it equals the positive literal exactly;
/// anything else, including a different case or a typo, maps to `"0"`.
/// No trimming is applied to the field itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthPolicy {
    positive_literal: String,
}

impl TruthPolicy {
    /// Policy with a custom positive-class literal.
    pub fn new(positive_literal: impl Into<String>) -> Self {
        Self {
            positive_literal: positive_literal.into(),
        }
    }

    /// The literal marking the positive class.
    #[must_use]
    pub fn positive_literal(&self) -> &str {
        &self.positive_literal
    }

    /// Derive the label token for one field.
    #[must_use]
    pub fn derive(&self, field: &str) -> &'static str {
        if field == self.positive_literal {
            "1"
        } else {
            "0"
        }
    }
}

impl Default for TruthPolicy {
    /// The standard submission format: `True` marks the positive class.
    fn default() -> Self {
        Self::new("True")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_set_order() {
        let labels = LabelSet::binary();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.token(0), Some("0"));
        assert_eq!(labels.token(1), Some("1"));
        assert_eq!(labels.token(2), None);
    }

    #[test]
    fn test_index_lookup() {
        let labels = LabelSet::binary();
        assert_eq!(labels.index("0"), Some(0));
        assert_eq!(labels.index("1"), Some(1));
        assert_eq!(labels.index("2"), None);
    }

    #[test]
    fn test_custom_set_preserves_order() {
        let labels = LabelSet::new(["1", "2", "3", "4", "5"]).expect("valid set");
        assert_eq!(labels.len(), 5);
        assert_eq!(labels.token(0), Some("1"));
        assert_eq!(labels.index("5"), Some(4));
        let collected: Vec<&str> = labels.iter().collect();
        assert_eq!(collected, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_empty_set_rejected() {
        let result = LabelSet::new(Vec::<String>::new());
        assert!(matches!(result, Err(Error::InvalidLabelSet(_))));
    }

    #[test]
    fn test_duplicate_tokens_rejected() {
        let result = LabelSet::new(["0", "1", "0"]);
        assert!(matches!(result, Err(Error::InvalidLabelSet(_))));
    }

    #[test]
    fn test_indices_maps_tokens() {
        let labels = LabelSet::binary();
        let tokens = vec!["1".to_string(), "0".to_string(), "1".to_string()];
        assert_eq!(labels.indices(&tokens).expect("known tokens"), vec![1, 0, 1]);
    }

    #[test]
    fn test_indices_rejects_unknown_token() {
        let labels = LabelSet::binary();
        let tokens = vec!["1".to_string(), "maybe".to_string()];
        match labels.indices(&tokens) {
            Err(Error::UnknownLabel { token }) => assert_eq!(token, "maybe"),
            other => panic!("expected UnknownLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_truth_policy_exact_literal() {
        let policy = TruthPolicy::default();
        assert_eq!(policy.derive("True"), "1");
        assert_eq!(policy.derive("False"), "0");
    }

    #[test]
    fn test_truth_policy_is_case_sensitive() {
        let policy = TruthPolicy::default();
        assert_eq!(policy.derive("true"), "0");
        assert_eq!(policy.derive("TRUE"), "0");
        assert_eq!(policy.derive("Ture"), "0");
        assert_eq!(policy.derive(""), "0");
    }

    #[test]
    fn test_truth_policy_no_field_trimming() {
        let policy = TruthPolicy::default();
        assert_eq!(policy.derive(" True"), "0");
        assert_eq!(policy.derive("True "), "0");
    }

    #[test]
    fn test_truth_policy_custom_literal() {
        let policy = TruthPolicy::new("yes");
        assert_eq!(policy.derive("yes"), "1");
        assert_eq!(policy.derive("True"), "0");
        assert_eq!(policy.positive_literal(), "yes");
    }
}
