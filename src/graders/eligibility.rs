use crate::graders::aggregate::final_grade;
use crate::graders::policy::GradingPolicy;
use crate::graders::types::{EligibleSet, Gradebook};
use crate::scores::honors_score;

/// One student's inputs to the eligibility decision. Built per student while
/// scanning the gradebook and discarded immediately after.
struct EligibilityRecord {
    grade_point: f64,
    honors_score: i64,
}

impl EligibilityRecord {
    fn is_eligible(&self, min_honors_score: i64, policy: &GradingPolicy) -> bool {
        self.honors_score >= min_honors_score && self.grade_point >= policy.honors_min_grade
    }
}

/// Returns the IDs of students eligible for honors credit: an honors score of
/// at least `min_honors_score` and a final grade of at least
/// `policy.honors_min_grade`. A student without an honors entry scores 0 and
/// can only qualify if the threshold allows it.
pub fn eligible_for_honors(
    gradebook: &Gradebook,
    min_honors_score: i64,
    policy: &GradingPolicy,
) -> EligibleSet {
    gradebook
        .iter()
        .filter(|(_, record)| {
            EligibilityRecord {
                grade_point: final_grade(record, policy),
                honors_score: honors_score(record).unwrap_or(0),
            }
            .is_eligible(min_honors_score, policy)
        })
        .map(|(id, _)| id.clone())
        .collect()
}
