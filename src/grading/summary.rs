use crate::grading::grade::GradeScale;
use crate::grading::types::{ClassSummary, GradeCount, StudentResult};

/// Aggregates graded students into class-wide statistics.
///
/// The distribution lists every letter of `scale` in scale order, including
/// letters nobody earned. An empty class yields zeroed statistics.
pub fn summarize(results: &[StudentResult], scale: &GradeScale) -> ClassSummary {
    let percentages: Vec<f64> = results.iter().map(|r| r.percentage).collect();

    let avg = mean(&percentages);
    let sd = stddev(&percentages, avg);

    let min = percentages.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = percentages.iter().copied().reduce(f64::max).unwrap_or(0.0);

    let distribution = scale
        .letters()
        .into_iter()
        .map(|letter| GradeCount {
            grade: letter.to_string(),
            count: results.iter().filter(|r| r.grade == letter).count(),
        })
        .collect();

    ClassSummary {
        students: results.len(),
        mean: avg,
        stddev: sd,
        min,
        max,
        distribution,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a pre-computed mean.
fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
