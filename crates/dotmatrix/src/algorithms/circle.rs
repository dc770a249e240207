use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::Point;

use super::{narrow, Pending};

/// The outline of a circle, as chosen by the midpoint circle algorithm
///
/// The four cardinal points come first, then one octant is walked and every
/// step is mirrored into the other seven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    cx: i64,
    cy: i64,
    r: i64,
    f: i64,
    ddf_x: i64,
    ddf_y: i64,
    x: i64,
    y: i64,
    started: bool,
    pending: Pending,
}

impl Circle {
    /// Create the outline of the circle around `center` with radius `r`
    pub fn new((cx, cy): Point, r: u32) -> Self {
        let r = i64::from(r);
        Circle {
            cx: cx.into(),
            cy: cy.into(),
            r,
            f: 1 - r,
            ddf_x: 0,
            ddf_y: -2 * r,
            x: 0,
            y: r,
            started: false,
            pending: SmallVec::new(),
        }
    }

    fn at(&self, dx: i64, dy: i64) -> Point {
        (narrow(self.cx + dx), narrow(self.cy + dy))
    }

    fn queue(&mut self, points: &[Point]) {
        self.pending.extend(points.iter().rev().copied());
    }

    /// Queue the next batch of points, returns false once the octant is done
    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            let r = self.r;
            let cardinals = [self.at(0, r), self.at(0, -r), self.at(r, 0), self.at(-r, 0)];
            self.queue(&cardinals);
            return true;
        }
        if self.x >= self.y {
            return false;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x + 1;
        // r = 1 steps straight onto the axes, which the cardinals already cover
        if self.y == 0 {
            return true;
        }

        let (x, y) = (self.x, self.y);
        let octants = [
            self.at(x, y),
            self.at(-x, y),
            self.at(x, -y),
            self.at(-x, -y),
            self.at(y, x),
            self.at(-y, x),
            self.at(y, -x),
            self.at(-y, -x),
        ];
        self.queue(&octants);
        true
    }
}

impl Iterator for Circle {
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

impl FusedIterator for Circle {}

#[cfg(test)]
mod tests {
    use super::Circle;

    #[test]
    fn test_zero_radius() {
        let points: Vec<_> = Circle::new((4, 5), 0).collect();
        assert_eq!(points, [(4, 5); 4]);
    }

    #[test]
    fn test_radius_one() {
        let points: Vec<_> = Circle::new((0, 0), 1).collect();
        assert_eq!(points, [(0, 1), (0, -1), (1, 0), (-1, 0)]);
    }

    #[test]
    fn test_no_cardinal_repeats() {
        for r in 1..20 {
            let points: Vec<_> = Circle::new((0, 0), r).collect();
            let r = r as i32;
            let cardinals = [(0, r), (0, -r), (r, 0), (-r, 0)];
            for c in cardinals {
                assert_eq!(points.iter().filter(|&&p| p == c).count(), 1, "r = {}", r);
            }
        }
    }

    #[test]
    fn test_points_near_radius() {
        for r in 1..30u32 {
            let rf = f64::from(r);
            for (x, y) in Circle::new((0, 0), r) {
                let d = f64::from(x).hypot(f64::from(y));
                assert!((d - rf).abs() < 1.0, "({}, {}) off for r = {}", x, y, r);
            }
        }
    }

    #[test]
    fn test_restartable() {
        let circle = Circle::new((10, 10), 7);
        let a: Vec<_> = circle.clone().collect();
        let b: Vec<_> = circle.collect();
        assert_eq!(a, b);
    }
}
