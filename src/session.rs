//! Runs one grading session from the welcome banner to the results.

use anyhow::Result;
use chrono::Utc;
use std::io::{BufRead, Write};
use tracing::info;

use crate::console::Console;
use crate::entry::{collect_components, collect_students};
use crate::grading::grade::GradeScale;
use crate::grading::percentage::grade_student;
use crate::grading::summary::summarize;
use crate::grading::types::{ClassSummary, Report, StudentResult};

/// Options that change what a session prints after the results.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Print class statistics and the grade distribution.
    pub summary: bool,
}

/// Drives the three stages against `console` and prints the results.
///
/// Returns `None` when no students were entered, otherwise the full report
/// so the caller can export it.
#[tracing::instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    scale: &GradeScale,
    options: &SessionOptions,
) -> Result<Option<Report>> {
    console.say("Welcome to the interactive Grade Calculator.\n")?;

    let components = collect_components(console)?;

    console.say("\nComponents and normalized weights:")?;
    for c in &components {
        console.say(&format!(" - {}: {:.2}%", c.name, c.weight))?;
    }

    console.say("\nEnter student scores. Press Enter at student name prompt to finish.")?;
    let students = collect_students(console, &components)?;

    if students.is_empty() {
        console.say("No students entered. Exiting.")?;
        info!("No students entered");
        return Ok(None);
    }

    let results: Vec<StudentResult> = students
        .iter()
        .map(|s| grade_student(s, &components, scale))
        .collect();

    console.say("\nResults:")?;
    for r in &results {
        console.say(&format!("{}: {:.2}% -> {}", r.student, r.percentage, r.grade))?;
    }

    let summary = summarize(&results, scale);
    if options.summary {
        print_summary(console, &summary)?;
    }

    console.say("\nDone.")?;
    info!(
        students = results.len(),
        class_mean = summary.mean,
        "Session complete"
    );

    Ok(Some(Report {
        generated_at: Utc::now(),
        components,
        results,
        summary,
    }))
}

fn print_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    summary: &ClassSummary,
) -> Result<()> {
    console.say(&format!(
        "\nClass average: {:.2}% (std dev {:.2}, min {:.2}%, max {:.2}%)",
        summary.mean, summary.stddev, summary.min, summary.max
    ))?;
    console.say("Grade distribution:")?;
    for g in &summary.distribution {
        console.say(&format!(" - {}: {}", g.grade, g.count))?;
    }
    Ok(())
}
