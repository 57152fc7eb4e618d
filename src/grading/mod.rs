//! Weighted grading: component weights, percentages and letter grades.
//!
//! This module holds the pure half of the calculator. Nothing here reads
//! input or prints; the console stages in [`crate::entry`] and
//! [`crate::session`] feed it and report what it returns.

pub mod grade;
pub mod percentage;
pub mod summary;
pub mod types;
pub mod weights;
