//! Per-student score extraction and category aggregation.

use crate::graders::types::AssignmentRecord;

/// Homework assignments ("HW1", "HW2", ...).
pub const HOMEWORK: &str = "HW";
/// Lab attendance entries ("Lab1", "Lab2", ...).
pub const LAB: &str = "Lab";
/// Exams ("Exam1", "MidtermExam", ...).
pub const EXAM: &str = "Exam";
/// Projects, including the honors project ("Project1", "HonorsProject").
pub const PROJECT: &str = "Project";
/// Honors-track entries ("HonorsProject").
pub const HONORS: &str = "Honors";

/// Returns the scores of all assignments whose name contains `category`.
///
/// The match is case-sensitive and may occur anywhere in the assignment name,
/// so "HonorsProject" belongs to both the "Honors" and "Project" categories.
/// Score strings that are empty or fail to parse as an integer count as 0;
/// gradebook exports leave unsubmitted work blank and that must not abort
/// grading. Scores come back in the record's key order.
pub fn extract_scores(record: &AssignmentRecord, category: &str) -> Vec<i64> {
    record
        .iter()
        .filter(|(name, _)| name.contains(category))
        .map(|(_, score)| score.trim().parse().unwrap_or(0))
        .collect()
}

/// Sums every score in `category` for one student.
pub fn category_total(record: &AssignmentRecord, category: &str) -> i64 {
    extract_scores(record, category).iter().sum()
}

/// Sums the student's `n` highest homework scores.
///
/// Summing only the top performers is how the course implements its
/// drop-the-lowest policy: with 17 homeworks on the books and `n = 15`, the
/// two lowest scores never enter the total. When fewer than `n` homework
/// entries exist, all of them count.
pub fn top_n_homework_total(record: &AssignmentRecord, n: usize) -> i64 {
    let mut scores = extract_scores(record, HOMEWORK);
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.iter().take(n).sum()
}

/// Counts the labs a student did not complete.
///
/// A lab is complete only at a score of exactly 1. Zero, blank, and partial
/// credit all count as missing.
pub fn missing_lab_count(record: &AssignmentRecord) -> i64 {
    extract_scores(record, LAB)
        .iter()
        .filter(|&&score| score != 1)
        .count() as i64
}

/// Returns the student's honors score, or `None` when the student has no
/// honors-category entry at all.
///
/// A record carries at most one honors entry in practice; if the export ever
/// contains several, the first in key order wins.
pub fn honors_score(record: &AssignmentRecord) -> Option<i64> {
    extract_scores(record, HONORS).first().copied()
}
