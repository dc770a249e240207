use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::Point;

use super::{narrow, Pending};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    /// Walking the quadrant from the top towards the horizontal axis
    Arc,
    /// Closing the caps along the horizontal axis
    Fill,
    Done,
}

/// The outline of an axis-aligned ellipse, as chosen by the midpoint algorithm
///
/// One quadrant is walked from `(0, r2)` down to the horizontal axis and
/// mirrored into the other three. For flat ellipses the walk reaches the axis
/// before `dx` reaches `r1`, so a final pass fills the remaining pixels along
/// `y = center.y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ellipse {
    cx: i64,
    cy: i64,
    r1: i64,
    r1_sq: i128,
    r2_sq: i128,
    dx: i64,
    dy: i64,
    err: i128,
    phase: Phase,
    pending: Pending,
}

impl Ellipse {
    /// Create the outline around `center` with horizontal radius `r1` and
    /// vertical radius `r2`
    pub fn new((cx, cy): Point, r1: u32, r2: u32) -> Self {
        let r1_sq = i128::from(r1) * i128::from(r1);
        let r2_sq = i128::from(r2) * i128::from(r2);
        Ellipse {
            cx: cx.into(),
            cy: cy.into(),
            r1: r1.into(),
            r1_sq,
            r2_sq,
            dx: 0,
            dy: r2.into(),
            err: r2_sq - (2 * i128::from(r2) - 1) * r1_sq,
            phase: Phase::Arc,
            pending: SmallVec::new(),
        }
    }

    fn at(&self, dx: i64, dy: i64) -> Point {
        (narrow(self.cx + dx), narrow(self.cy + dy))
    }

    fn queue(&mut self, points: &[Point]) {
        self.pending.extend(points.iter().rev().copied());
    }

    fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Arc => {
                let (dx, dy) = (self.dx, self.dy);
                let quadrants = [
                    self.at(dx, dy),
                    self.at(dx, -dy),
                    self.at(-dx, dy),
                    self.at(-dx, -dy),
                ];
                self.queue(&quadrants);

                let e2 = 2 * self.err;
                if e2 <= (2 * i128::from(self.dx) + 1) * self.r2_sq {
                    self.dx += 1;
                    self.err += (2 * i128::from(self.dx) + 1) * self.r2_sq;
                }
                if e2 >= -(2 * i128::from(self.dy) + 1) * self.r1_sq {
                    self.dy -= 1;
                    self.err -= (2 * i128::from(self.dy) - 1) * self.r1_sq;
                }
                if self.dy < 0 {
                    self.phase = Phase::Fill;
                }
                true
            }
            Phase::Fill => {
                if self.dx < self.r1 {
                    self.dx += 1;
                    let caps = [self.at(self.dx, 0), self.at(-self.dx, 0)];
                    self.queue(&caps);
                } else {
                    self.phase = Phase::Done;
                }
                true
            }
            Phase::Done => false,
        }
    }
}

impl Iterator for Ellipse {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.pending.pop() {
                return Some(point);
            }
            if !self.advance() {
                return None;
            }
        }
    }
}

impl FusedIterator for Ellipse {}
