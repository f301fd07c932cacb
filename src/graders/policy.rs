//! Grading-policy configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The knobs of the grading formula.
///
/// Stored as a plain JSON object on disk; any omitted field keeps its
/// default, so a policy file only has to name what it changes:
/// ```json
/// {
///   "top_homework_count": 12,
///   "lab_penalty": 0.25
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingPolicy {
    /// How many of the highest homework scores count toward the total.
    pub top_homework_count: usize,
    /// Missed labs forgiven before the penalty starts.
    pub forgiven_labs: i64,
    /// Grade-point deduction per missed lab past the forgiven count.
    pub lab_penalty: f64,
    /// Grade points below this collapse to 0.0.
    pub passing_floor: f64,
    /// Minimum final grade point for honors-credit eligibility.
    pub honors_min_grade: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        GradingPolicy {
            top_homework_count: 15,
            forgiven_labs: 2,
            lab_penalty: 0.5,
            passing_floor: 1.0,
            honors_min_grade: 3.5,
        }
    }
}

impl GradingPolicy {
    /// Loads a policy from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read policy file {path}"))?;
        serde_json::from_str(&content).with_context(|| format!("malformed policy file {path}"))
    }
}
