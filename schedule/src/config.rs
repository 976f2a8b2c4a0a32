//! Analysis configuration.
//!
//! Typed configuration built with bon, with an environment-variable fallback.

use std::str::FromStr;

/// What the index normalizer does with an index that is not a plain variable
/// (a constant, or a compound expression such as `i + 1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Leave it out of the buffer range.
    #[default]
    Drop,
    /// Fail the analysis of the enclosing block.
    Reject,
}

impl FromStr for IndexPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown index policy '{other}', expected 'drop' or 'reject'")),
        }
    }
}

/// Configuration of the schedule-block analyses.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct AnalysisConfig {
    #[builder(default)]
    pub index_policy: IndexPolicy,
}

impl AnalysisConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `KESTREL_INDEX_POLICY` - `drop` (default) or `reject`
    pub fn from_env() -> Self {
        Self::from_index_policy_var(std::env::var("KESTREL_INDEX_POLICY").ok().as_deref())
    }

    /// Configuration for a raw `KESTREL_INDEX_POLICY` value.
    ///
    /// An unknown value is logged and replaced by the default policy.
    pub fn from_index_policy_var(value: Option<&str>) -> Self {
        let Some(value) = value else { return Self::default() };
        let index_policy = value.parse().unwrap_or_else(|error: String| {
            tracing::warn!(value, %error, "invalid KESTREL_INDEX_POLICY, using the default policy");
            IndexPolicy::default()
        });
        Self { index_policy }
    }
}
