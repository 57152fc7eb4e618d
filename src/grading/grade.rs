/// Letter returned when a percentage clears none of a scale's cutoffs.
pub const FALLBACK_LETTER: &str = "F";

/// A minimum percentage and the letter it earns.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutoff {
    pub min: f64,
    pub letter: String,
}

/// Ordered cutoffs, highest first, used to turn a percentage into a letter.
///
/// The default table:
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | >= 80   | B     |
/// | >= 70   | C     |
/// | >= 60   | D     |
/// | >= 0    | F     |
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    cutoffs: Vec<Cutoff>,
}

impl GradeScale {
    /// Builds a scale from `(cutoff, letter)` pairs, kept in the given order.
    /// Callers are expected to list them highest cutoff first.
    pub fn new<L: Into<String>>(cutoffs: impl IntoIterator<Item = (f64, L)>) -> Self {
        Self {
            cutoffs: cutoffs
                .into_iter()
                .map(|(min, letter)| Cutoff {
                    min,
                    letter: letter.into(),
                })
                .collect(),
        }
    }

    /// Letters in scale order, without duplicates.
    pub fn letters(&self) -> Vec<&str> {
        let mut letters: Vec<&str> = Vec::with_capacity(self.cutoffs.len() + 1);
        for cutoff in &self.cutoffs {
            if !letters.contains(&cutoff.letter.as_str()) {
                letters.push(&cutoff.letter);
            }
        }
        if !letters.contains(&FALLBACK_LETTER) {
            letters.push(FALLBACK_LETTER);
        }
        letters
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::new([(90.0, "A"), (80.0, "B"), (70.0, "C"), (60.0, "D"), (0.0, "F")])
    }
}

/// Maps a percentage onto `scale`, returning the letter of the first cutoff
/// it meets or exceeds, or `"F"` if it clears none of them.
pub fn letter_grade(percent: f64, scale: &GradeScale) -> &str {
    scale
        .cutoffs
        .iter()
        .find(|c| percent >= c.min)
        .map(|c| c.letter.as_str())
        .unwrap_or(FALLBACK_LETTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        let scale = GradeScale::default();
        assert_eq!(letter_grade(100.0, &scale), "A");
        assert_eq!(letter_grade(95.0, &scale), "A");
        assert_eq!(letter_grade(90.0, &scale), "A");
        assert_eq!(letter_grade(89.99, &scale), "B");
        assert_eq!(letter_grade(80.0, &scale), "B");
        assert_eq!(letter_grade(79.99, &scale), "C");
        assert_eq!(letter_grade(70.0, &scale), "C");
        assert_eq!(letter_grade(60.0, &scale), "D");
        assert_eq!(letter_grade(59.99, &scale), "F");
        assert_eq!(letter_grade(0.0, &scale), "F");
    }

    #[test]
    fn test_negative_percent_falls_through_to_f() {
        assert_eq!(letter_grade(-5.0, &GradeScale::default()), "F");
    }

    #[test]
    fn test_above_hundred_is_still_a() {
        assert_eq!(letter_grade(112.5, &GradeScale::default()), "A");
    }

    #[test]
    fn test_scale_without_floor_uses_fallback() {
        let scale = GradeScale::new([(50.0, "Pass")]);
        assert_eq!(letter_grade(75.0, &scale), "Pass");
        assert_eq!(letter_grade(49.0, &scale), "F");
    }

    #[test]
    fn test_scales_are_independent_values() {
        let strict = GradeScale::new([(95.0, "A"), (0.0, "F")]);
        let default = GradeScale::default();
        assert_eq!(letter_grade(92.0, &strict), "F");
        assert_eq!(letter_grade(92.0, &default), "A");
    }

    #[test]
    fn test_letters_in_scale_order() {
        assert_eq!(GradeScale::default().letters(), vec!["A", "B", "C", "D", "F"]);
        assert_eq!(GradeScale::new([(50.0, "P")]).letters(), vec!["P", "F"]);
    }
}
