//! Weight totals and proportional rescaling.

use crate::grading::types::Component;

/// How far the weight total may drift from 100 before it gets rescaled.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// What [`normalize_weights`] did to a component list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// The weights already summed to 100 and were left alone.
    Unchanged,
    /// Every weight was rescaled; `original_total` is the sum before.
    Rescaled { original_total: f64 },
}

/// Returned when the weights sum to zero and cannot be rescaled.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Total weight must be greater than zero. Please define the components again.")]
pub struct ZeroTotalWeight;

pub fn total_weight(components: &[Component]) -> f64 {
    components.iter().map(|c| c.weight).sum()
}

/// Rescales weights in place so they add up to 100.
///
/// Each weight `w` becomes `w * 100 / total` unless the total is already
/// within [`WEIGHT_TOLERANCE`] of 100.
pub fn normalize_weights(components: &mut [Component]) -> Result<Normalization, ZeroTotalWeight> {
    let total = total_weight(components);

    if (total - 100.0).abs() <= WEIGHT_TOLERANCE {
        return Ok(Normalization::Unchanged);
    }
    if total <= 0.0 {
        return Err(ZeroTotalWeight);
    }

    // Scale by the largest weight first so huge entries cannot overflow the sum.
    let max = components.iter().map(|c| c.weight).fold(0.0, f64::max);
    let scaled_total: f64 = components.iter().map(|c| c.weight / max).sum();
    for c in components.iter_mut() {
        c.weight = c.weight / max / scaled_total * 100.0;
    }

    Ok(Normalization::Rescaled {
        original_total: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(weights: &[f64]) -> Vec<Component> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Component::new(format!("c{i}"), *w))
            .collect()
    }

    #[test]
    fn test_exact_hundred_left_alone() {
        let mut comps = components(&[30.0, 30.0, 40.0]);
        assert_eq!(normalize_weights(&mut comps), Ok(Normalization::Unchanged));
        assert_eq!(comps, components(&[30.0, 30.0, 40.0]));
    }

    #[test]
    fn test_within_tolerance_left_alone() {
        let mut comps = components(&[50.0, 50.0 + 5e-7]);
        assert_eq!(normalize_weights(&mut comps), Ok(Normalization::Unchanged));
        assert_eq!(comps[1].weight, 50.0 + 5e-7);
    }

    #[test]
    fn test_over_hundred_rescaled() {
        let mut comps = components(&[50.0, 60.0]);
        let result = normalize_weights(&mut comps).unwrap();

        assert_eq!(
            result,
            Normalization::Rescaled {
                original_total: 110.0
            }
        );
        assert!((comps[0].weight - 45.454545).abs() < 1e-5);
        assert!((comps[1].weight - 54.545454).abs() < 1e-5);
        assert!((total_weight(&comps) - 100.0).abs() <= WEIGHT_TOLERANCE);
    }

    #[test]
    fn test_rescale_is_proportional() {
        let raw = [1.0, 2.0, 3.5, 0.0, 7.25];
        let sum: f64 = raw.iter().sum();
        let mut comps = components(&raw);
        normalize_weights(&mut comps).unwrap();

        for (c, w) in comps.iter().zip(raw) {
            assert!((c.weight - w * 100.0 / sum).abs() < 1e-9);
        }
        assert!((total_weight(&comps) - 100.0).abs() <= WEIGHT_TOLERANCE);
        assert_eq!(comps[3].weight, 0.0);
    }

    #[test]
    fn test_single_component_becomes_hundred() {
        let mut comps = components(&[20.0]);
        normalize_weights(&mut comps).unwrap();
        assert!((comps[0].weight - 100.0).abs() <= WEIGHT_TOLERANCE);
    }

    #[test]
    fn test_huge_weight_does_not_overflow() {
        let mut comps = components(&[1e307]);
        normalize_weights(&mut comps).unwrap();
        assert!((comps[0].weight - 100.0).abs() <= WEIGHT_TOLERANCE);
    }

    #[test]
    fn test_weights_overflowing_the_total_still_normalize() {
        let mut comps = components(&[1e308, 1e308]);
        let result = normalize_weights(&mut comps).unwrap();

        assert!(matches!(result, Normalization::Rescaled { .. }));
        assert!((comps[0].weight - 50.0).abs() <= WEIGHT_TOLERANCE);
        assert!((comps[1].weight - 50.0).abs() <= WEIGHT_TOLERANCE);
        assert!((total_weight(&comps) - 100.0).abs() <= WEIGHT_TOLERANCE);
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let mut comps = components(&[0.0, 0.0]);
        assert_eq!(normalize_weights(&mut comps), Err(ZeroTotalWeight));
        assert_eq!(comps, components(&[0.0, 0.0]));
    }
}
