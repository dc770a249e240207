use std::iter::FusedIterator;

use log::debug;
use smallvec::SmallVec;

use crate::{MatrixError, MatrixResult, Point};

use super::round;

/// Evaluate the Bezier curve defined by `control_points` at `t` using
/// de Casteljau's algorithm
///
/// Returns `None` only if there are no control points at all. A single control
/// point is returned as-is for every `t`.
///
/// ```
/// # use dotmatrix::algorithms::bezier_evaluate;
/// let quad = [(0, 0), (2, 4), (4, 0)];
/// assert_eq!(bezier_evaluate(0.5, &quad), Some((2.0, 2.0)));
/// assert_eq!(bezier_evaluate(0.0, &quad), Some((0.0, 0.0)));
/// assert_eq!(bezier_evaluate(0.3, &[(7, 1)]), Some((7.0, 1.0)));
/// assert_eq!(bezier_evaluate(0.3, &[]), None);
/// ```
pub fn bezier_evaluate(t: f64, control_points: &[Point]) -> Option<(f64, f64)> {
    let mut beta: SmallVec<[(f64, f64); 8]> = control_points
        .iter()
        .map(|&(x, y)| (f64::from(x), f64::from(y)))
        .collect();
    let n = beta.len();
    for j in 1..n {
        for k in 0..(n - j) {
            let (x0, y0) = beta[k];
            let (x1, y1) = beta[k + 1];
            beta[k] = (x0 * (1.0 - t) + x1 * t, y0 * (1.0 - t) + y1 * t);
        }
    }
    beta.first().copied()
}

/// The number of samples used when the caller does not pick one
///
/// This is a quarter of the perimeter of the closed control polygon, where
/// every edge is measured by its larger coordinate delta.
pub fn default_steps(control_points: &[Point]) -> u32 {
    let n = control_points.len();
    let perimeter: u64 = (0..n)
        .map(|i| {
            let (x0, y0) = control_points[i];
            let (x1, y1) = control_points[(i + n - 1) % n];
            let dx = (i64::from(x0) - i64::from(x1)).unsigned_abs();
            let dy = (i64::from(y0) - i64::from(y1)).unsigned_abs();
            dx.max(dy)
        })
        .sum();
    u32::try_from(perimeter / 4).unwrap_or(u32::MAX)
}

/// Sample the Bezier curve defined by `control_points`
///
/// A `steps` of `None` or `Some(0)` uses [`default_steps`]. The samples are
/// taken at `t = i / steps` for `i` in `0..steps` and rounded to the nearest
/// pixel, so the last control point is not part of the output and has to be
/// appended by the caller.
pub fn bezier_sample(
    control_points: &[Point],
    steps: Option<u32>,
) -> MatrixResult<BezierSamples<'_>> {
    if control_points.len() < 2 {
        return Err(MatrixError::InsufficientControlPoints(control_points.len()));
    }
    let steps = match steps {
        Some(steps) if steps > 0 => steps,
        _ => {
            let steps = default_steps(control_points);
            debug!(
                "Sampling curve with {} control points in {} steps",
                control_points.len(),
                steps
            );
            steps
        }
    };
    Ok(BezierSamples {
        control_points,
        step: 0,
        steps,
    })
}

/// Rounded sample points of a Bezier curve, see [`bezier_sample`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BezierSamples<'a> {
    control_points: &'a [Point],
    step: u32,
    steps: u32,
}

impl BezierSamples<'_> {
    /// The total number of samples
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

impl Iterator for BezierSamples<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        let t = f64::from(self.step) / f64::from(self.steps);
        self.step += 1;
        bezier_evaluate(t, self.control_points).map(|(x, y)| (round(x), round(y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.steps - self.step) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BezierSamples<'_> {}

impl FusedIterator for BezierSamples<'_> {}
