//! Interactive collection of components and student scores.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::grading::types::{Component, StudentRecord};
use crate::grading::weights::{Normalization, normalize_weights};

/// Prompts for `(name, weight)` pairs until an empty name is entered after
/// at least one component, then normalizes the weights to sum to 100.
///
/// If every weight is zero the collected list is discarded and definition
/// starts over.
#[tracing::instrument(skip_all)]
pub fn collect_components<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<Component>> {
    console.say(
        "Define grading components and their weights (e.g., Homework 30, Midterm 30, Final 40).",
    )?;

    loop {
        let mut components = read_components(console)?;

        match normalize_weights(&mut components) {
            Ok(Normalization::Unchanged) => {
                info!(count = components.len(), "Components defined");
                return Ok(components);
            }
            Ok(Normalization::Rescaled { original_total }) => {
                console.say(&format!(
                    "Total weights sum to {original_total:.2}%. We'll normalize the weights so they add up to 100%."
                ))?;
                info!(
                    count = components.len(),
                    original_total, "Components defined, weights normalized"
                );
                return Ok(components);
            }
            Err(e) => {
                warn!("All component weights are zero, restarting definition");
                console.say(&e.to_string())?;
            }
        }
    }
}

fn read_components<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Vec<Component>> {
    let mut components: Vec<Component> = Vec::new();

    loop {
        let name = match console.prompt_line("Component name (or press Enter to finish): ")? {
            Some(name) => name,
            None if components.is_empty() => {
                bail!("input closed before any grading component was defined")
            }
            None => break,
        };

        if name.is_empty() {
            if !components.is_empty() {
                break;
            }
            console.say("You must add at least one component.")?;
            continue;
        }

        if components.iter().any(|c| c.name == name) {
            warn!(component = %name, "Duplicate component name; scores will be shared");
        }

        let weight =
            console.prompt_non_negative(&format!("Weight for '{name}' (as percent, e.g., 30): "))?;
        debug!(component = %name, weight, "Component accepted");
        components.push(Component::new(name, weight));
    }

    Ok(components)
}

/// Prompts for one student's name and a score per component.
///
/// Returns `None` when the name is empty or the input has ended.
pub fn collect_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    components: &[Component],
) -> Result<Option<StudentRecord>> {
    let name = match console.prompt_line("Student name (or press Enter to cancel student entry): ")? {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(None),
    };

    let mut record = StudentRecord::new(name);
    for c in components {
        let score = console.prompt_non_negative(&format!(
            "Score for {} (enter absolute score; use same scale for all components): ",
            c.name
        ))?;
        record.insert_score(c.name.as_str(), score);
    }

    debug!(student = %record.name, "Student recorded");
    Ok(Some(record))
}

/// Collects students until an empty name ends entry.
#[tracing::instrument(skip_all, fields(components = components.len()))]
pub fn collect_students<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    components: &[Component],
) -> Result<Vec<StudentRecord>> {
    let mut students = Vec::new();
    while let Some(record) = collect_student(console, components)? {
        students.push(record);
    }
    info!(count = students.len(), "Student entry finished");
    Ok(students)
}
