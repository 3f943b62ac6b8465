//! Extraction options

use serde::{Deserialize, Serialize};

/// How an `optional` tag on an output-aggregate field is treated
///
/// Outputs have no optional flag, so the tag carries no meaning there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOptionalPolicy {
    /// Ignore the tag
    #[default]
    Ignore,
    /// Fail with `InvalidTagValue`
    Reject,
}

/// Tag policies applied while flattening aggregates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Fail on tags other than `optional` and `key`
    pub deny_unknown_tags: bool,

    /// Treatment of `optional` on output-aggregate fields
    pub output_optional: OutputOptionalPolicy,
}

impl ExtractionOptions {
    /// Options matching the default, lenient behaviour
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on unrecognised tags
    #[must_use]
    pub fn with_deny_unknown_tags(mut self, deny: bool) -> Self {
        self.deny_unknown_tags = deny;
        self
    }

    /// Set the output `optional` policy
    #[must_use]
    pub fn with_output_optional(mut self, policy: OutputOptionalPolicy) -> Self {
        self.output_optional = policy;
        self
    }
}
