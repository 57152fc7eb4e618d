//! Data types shared by the grading pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// A named, weighted grading category such as "Midterm".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    /// Percentage contribution to the final grade.
    pub weight: f64,
}

impl Component {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Scores entered for one student, keyed by component name.
///
/// A component entered twice under the same name shares a single slot here,
/// so the score typed last is the one both components read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    scores: HashMap<String, f64>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: HashMap::new(),
        }
    }

    /// Builder-style setter, handy when assembling records in tests.
    pub fn with_score(mut self, component: impl Into<String>, score: f64) -> Self {
        self.insert_score(component, score);
        self
    }

    pub fn insert_score(&mut self, component: impl Into<String>, score: f64) {
        self.scores.insert(component.into(), score);
    }

    /// Score for `component`, or `None` when nothing was entered for it.
    pub fn score(&self, component: &str) -> Option<f64> {
        self.scores.get(component).copied()
    }
}

/// Final percentage and letter for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentResult {
    pub student: String,
    pub percentage: f64,
    pub grade: String,
}

/// Count of students that earned a given letter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCount {
    pub grade: String,
    pub count: usize,
}

/// Class-wide statistics over all graded students.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub students: usize,
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub distribution: Vec<GradeCount>,
}

/// Everything a session produced, written out by `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub components: Vec<Component>,
    pub results: Vec<StudentResult>,
    pub summary: ClassSummary,
}
