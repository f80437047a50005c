//! Initial temperature calibration and schedule length.

use crate::cost::CostMatrix;
use crate::tour::{perturb, Tour};
use rand::Rng;

/// Number of random swaps sampled during calibration.
pub const CALIBRATION_SAMPLES: usize = 100;

/// Target acceptance level the initial temperature is scaled against.
pub const CALIBRATION_ACCEPTANCE: f64 = 0.9;

/// Initial temperature for a set of sampled tour costs: `-mean / ln(0.9)`.
///
/// Returns `0.0` when `costs` is empty.
pub fn initial_temperature_from_costs(costs: &[f64]) -> f64 {
    if costs.is_empty() {
        return 0.0;
    }
    let mean = costs.iter().sum::<f64>() / costs.len() as f64;
    -mean / CALIBRATION_ACCEPTANCE.ln()
}

/// Calibrates the starting temperature to the instance's cost scale.
///
/// Applies [`CALIBRATION_SAMPLES`] cumulative random swaps to a copy of
/// `tour` and feeds the cost observed after each one to
/// [`initial_temperature_from_costs`].
pub fn calibrate_initial_temperature<R: Rng>(
    matrix: &CostMatrix,
    tour: &Tour,
    rng: &mut R,
) -> f64 {
    if tour.is_empty() {
        return 0.0;
    }
    let mut walk = tour.clone();
    let costs: Vec<f64> = (0..CALIBRATION_SAMPLES)
        .map(|_| {
            perturb(&mut walk, rng);
            walk.cost(matrix)
        })
        .collect();
    initial_temperature_from_costs(&costs)
}

/// Iterations a geometric schedule runs before reaching `floor`:
/// `ceil(ln(floor / t0) / ln(alpha))`, or 0 when `t0 <= floor`.
pub fn expected_iterations(t0: f64, alpha: f64, floor: f64) -> usize {
    if t0 <= floor {
        return 0;
    }
    ((floor / t0).ln() / alpha.ln()).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Point;
    use crate::random::create_rng;

    #[test]
    fn test_temperature_formula() {
        let costs = [10.0, 12.0, 14.0];
        let t0 = initial_temperature_from_costs(&costs);
        let expected = -12.0 / 0.9f64.ln();
        assert!((t0 - expected).abs() < 1e-9);
        assert!(t0 > 0.0);
    }

    #[test]
    fn test_temperature_of_no_samples() {
        assert_eq!(initial_temperature_from_costs(&[]), 0.0);
    }

    #[test]
    fn test_calibration_on_constant_cost_instance() {
        // Every tour of an all-ones instance costs n, so the sampled mean is exact.
        let n = 7;
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        let matrix = CostMatrix::from_rows(rows).unwrap();
        let mut rng = create_rng(11);
        let t0 = calibrate_initial_temperature(&matrix, &Tour::identity(n), &mut rng);
        assert!((t0 - (-(n as f64) / 0.9f64.ln())).abs() < 1e-9);
    }

    #[test]
    fn test_calibration_scales_with_instance() {
        let small: Vec<Point> = (0..10)
            .map(|i| Point::new(i, i as f64, (i * i % 7) as f64))
            .collect();
        let large: Vec<Point> = small
            .iter()
            .map(|p| Point::new(p.id, p.x * 100.0, p.y * 100.0))
            .collect();
        let m_small = CostMatrix::from_points(&small).unwrap();
        let m_large = CostMatrix::from_points(&large).unwrap();
        let tour = Tour::identity(10);
        let t_small = calibrate_initial_temperature(&m_small, &tour, &mut create_rng(3));
        let t_large = calibrate_initial_temperature(&m_large, &tour, &mut create_rng(3));
        assert!((t_large / t_small - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_expected_iterations() {
        assert_eq!(expected_iterations(1.7, 0.5, 0.1), 5);
        assert_eq!(expected_iterations(0.1, 0.5, 0.1), 0);
        assert_eq!(expected_iterations(0.05, 0.9, 0.1), 0);
        let n = expected_iterations(1000.0, 0.999, 0.1);
        assert_eq!(n, ((0.1f64 / 1000.0).ln() / 0.999f64.ln()).ceil() as usize);
    }
}
