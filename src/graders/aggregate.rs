use crate::graders::grade::grade_point;
use crate::graders::policy::GradingPolicy;
use crate::graders::types::{AssignmentRecord, GradeResult, Gradebook};
use crate::scores::{EXAM, HONORS, PROJECT, category_total, missing_lab_count, top_n_homework_total};

/// Computes one student's overall point total.
///
/// Projects and exams count in full; homework counts only its top
/// `policy.top_homework_count` scores. The honors score is backed out at the
/// end: it is already folded into the project total upstream but is tracked
/// separately for eligibility, and must not inflate the main grade.
pub fn point_total(record: &AssignmentRecord, policy: &GradingPolicy) -> i64 {
    category_total(record, PROJECT) + category_total(record, EXAM)
        + top_n_homework_total(record, policy.top_homework_count)
        - category_total(record, HONORS)
}

/// Computes one student's final grade point.
///
/// The point total maps to a base grade point, then each missed lab past the
/// forgiven count costs `policy.lab_penalty`. Anything that lands below
/// `policy.passing_floor` collapses to 0.0, so the result is never strictly
/// between zero and the floor.
pub fn final_grade(record: &AssignmentRecord, policy: &GradingPolicy) -> f64 {
    let total = point_total(record, policy);
    let mut gp = grade_point(total);
    let unforgiven = missing_lab_count(record) - policy.forgiven_labs;
    if unforgiven > 0 {
        gp -= policy.lab_penalty * unforgiven as f64;
    }
    if gp < policy.passing_floor {
        gp = 0.0;
    }
    gp
}

/// Grades the whole class. Every student in the gradebook gets an entry;
/// missing categories simply contribute nothing.
pub fn grade_all(gradebook: &Gradebook, policy: &GradingPolicy) -> GradeResult {
    gradebook
        .iter()
        .map(|(id, record)| (id.clone(), final_grade(record, policy)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graders::types::AssignmentRecord;

    /// A student sitting exactly at 850 points before penalties: 300 project
    /// points, 300 exam points, 17 homeworks worth 20 each (top 15 = 300),
    /// and a 50-point honors project backed out.
    fn strong_student(missing_labs: usize) -> AssignmentRecord {
        let mut rec = AssignmentRecord::new();
        rec.insert("Project1".into(), "250".into());
        rec.insert("HonorsProject".into(), "50".into());
        rec.insert("Exam1".into(), "150".into());
        rec.insert("Exam2".into(), "150".into());
        for i in 1..=17 {
            rec.insert(format!("HW{i}"), "20".into());
        }
        for i in 1..=10 {
            let score = if i <= missing_labs { "0" } else { "1" };
            rec.insert(format!("Lab{i}"), score.into());
        }
        rec
    }

    #[test]
    fn test_point_total_backs_out_honors() {
        let policy = GradingPolicy::default();
        // 300 project (250 + 50 honors) + 300 exam + 300 top-15 HW - 50 honors
        assert_eq!(point_total(&strong_student(0), &policy), 850);
    }

    #[test]
    fn test_point_total_of_empty_record_is_zero() {
        let policy = GradingPolicy::default();
        assert_eq!(point_total(&AssignmentRecord::new(), &policy), 0);
    }

    #[test]
    fn test_one_missing_lab_is_forgiven() {
        let policy = GradingPolicy::default();
        assert_eq!(final_grade(&strong_student(1), &policy), 3.5);
    }

    #[test]
    fn test_four_missing_labs_cost_a_full_point() {
        let policy = GradingPolicy::default();
        // Two forgiven, two penalized at 0.5 each.
        assert_eq!(final_grade(&strong_student(4), &policy), 2.5);
    }

    #[test]
    fn test_penalty_below_floor_collapses_to_zero() {
        let policy = GradingPolicy::default();
        // Base 3.5, eight unforgiven labs would take it to -0.5.
        assert_eq!(final_grade(&strong_student(10), &policy), 0.0);
    }

    #[test]
    fn test_final_grade_never_lands_inside_the_floor_gap() {
        let policy = GradingPolicy::default();
        for missing in 0..=10 {
            let gp = final_grade(&strong_student(missing), &policy);
            assert!(
                gp == 0.0 || gp >= policy.passing_floor,
                "grade {gp} with {missing} missing labs is inside (0.0, {})",
                policy.passing_floor
            );
        }
    }

    #[test]
    fn test_grade_all_covers_every_student() {
        let policy = GradingPolicy::default();
        let mut gradebook = Gradebook::new();
        gradebook.insert("s001".into(), strong_student(0));
        gradebook.insert("s002".into(), AssignmentRecord::new());

        let grades = grade_all(&gradebook, &policy);
        assert_eq!(grades.len(), 2);
        assert_eq!(grades["s001"], 3.5);
        assert_eq!(grades["s002"], 0.0);
    }
}
