//! The grading pipeline: point totals, grade-point mapping, lab penalties,
//! and honors-credit eligibility.
//!
//! Everything in here is a pure function over an in-memory [`types::Gradebook`];
//! the CSV loader and the output writers live outside this module.

pub mod aggregate;
pub mod eligibility;
pub mod grade;
pub mod policy;
pub mod report;
pub mod types;
