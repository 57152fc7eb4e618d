use crate::grading::grade::{GradeScale, letter_grade};
use crate::grading::types::{Component, StudentRecord, StudentResult};

/// Weighted percentage for one student: the sum over components of
/// `score * weight / 100`.
///
/// A component with no entered score counts as 0. The result is not clamped,
/// so scores above the shared scale can push it past 100.
pub fn compute_percentage(record: &StudentRecord, components: &[Component]) -> f64 {
    components
        .iter()
        .map(|c| record.score(&c.name).unwrap_or(0.0) * (c.weight / 100.0))
        .sum()
}

/// Computes the percentage for `record` and looks its letter up in `scale`.
pub fn grade_student(
    record: &StudentRecord,
    components: &[Component],
    scale: &GradeScale,
) -> StudentResult {
    let percentage = compute_percentage(record, components);
    StudentResult {
        student: record.name.clone(),
        percentage,
        grade: letter_grade(percentage, scale).to_string(),
    }
}
