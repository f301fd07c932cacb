use crate::graders::aggregate::{final_grade, point_total};
use crate::graders::eligibility::eligible_for_honors;
use crate::graders::policy::GradingPolicy;
use crate::graders::types::{GradeReport, Gradebook, StudentSummary};
use crate::scores::{honors_score, missing_lab_count};
use chrono::Utc;

/// Assembles the full grading report for a class: one summary row per
/// student in ID order, stamped with the generation time.
pub fn build_report(
    gradebook: &Gradebook,
    min_honors_score: i64,
    policy: &GradingPolicy,
) -> GradeReport {
    let eligible = eligible_for_honors(gradebook, min_honors_score, policy);

    let students = gradebook
        .iter()
        .map(|(id, record)| StudentSummary {
            id: id.clone(),
            point_total: point_total(record, policy),
            grade_point: final_grade(record, policy),
            missing_labs: missing_lab_count(record),
            honors_score: honors_score(record),
            honors_eligible: eligible.contains(id),
        })
        .collect();

    GradeReport {
        generated_at: Utc::now(),
        min_honors_score,
        policy: policy.clone(),
        students,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graders::types::AssignmentRecord;

    #[test]
    fn test_report_has_a_row_per_student() {
        let policy = GradingPolicy::default();
        let mut gradebook = Gradebook::new();

        let mut top = AssignmentRecord::new();
        top.insert("Exam1".into(), "950".into());
        top.insert("HonorsProject".into(), "90".into());
        gradebook.insert("s001".into(), top);
        gradebook.insert("s002".into(), AssignmentRecord::new());

        let report = build_report(&gradebook, 85, &policy);

        assert_eq!(report.students.len(), 2);
        assert_eq!(report.min_honors_score, 85);

        let s1 = &report.students[0];
        assert_eq!(s1.id, "s001");
        assert_eq!(s1.point_total, 950);
        assert_eq!(s1.grade_point, 4.0);
        assert_eq!(s1.honors_score, Some(90));
        assert!(s1.honors_eligible);

        let s2 = &report.students[1];
        assert_eq!(s2.id, "s002");
        assert_eq!(s2.grade_point, 0.0);
        assert_eq!(s2.honors_score, None);
        assert!(!s2.honors_eligible);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = build_report(&Gradebook::new(), 85, &GradingPolicy::default());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("generated_at"));
        assert!(json.contains("min_honors_score"));
    }
}
