//! Data types used by the grading pipeline.

use crate::graders::policy::GradingPolicy;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One student's assignment-name → score-string mapping, exactly as stored in
/// the CSV. Scores are parsed on demand; the ordered map keeps extraction
/// deterministic.
pub type AssignmentRecord = BTreeMap<String, String>;

/// The whole class: student ID → that student's [`AssignmentRecord`]. Built
/// once by the loader and read-only afterwards.
pub type Gradebook = BTreeMap<String, AssignmentRecord>;

/// Student ID → final grade point. Every ID in the gradebook has an entry.
pub type GradeResult = BTreeMap<String, f64>;

/// Student IDs eligible for honors credit.
pub type EligibleSet = BTreeSet<String>;

/// Per-student line of the grade report.
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub(crate) id: String,
    pub(crate) point_total: i64,
    pub(crate) grade_point: f64,
    pub(crate) missing_labs: i64,
    pub(crate) honors_score: Option<i64>,
    pub(crate) honors_eligible: bool,
}

/// Complete output of one grading run, serialized as JSON.
#[derive(Debug, Serialize)]
pub struct GradeReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) min_honors_score: i64,
    pub(crate) policy: GradingPolicy,
    pub(crate) students: Vec<StudentSummary>,
}
