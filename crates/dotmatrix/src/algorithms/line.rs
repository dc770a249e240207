use std::iter::FusedIterator;

use crate::Point;

use super::narrow;

/// The pixels of a line segment, as chosen by Bresenham's algorithm
///
/// The iterator starts at the first point and steps towards the second one,
/// yielding every pixel of the 8-connected path exactly once. When the error
/// term allows a step along both axes in the same iteration, the step is
/// diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Line {
    /// Create the pixel sequence from `p0` to `p1`, both inclusive
    pub fn new((x0, y0): Point, (x1, y1): Point) -> Self {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Line {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let major = (self.x1 - self.x).abs().max((self.y1 - self.y).abs());
        usize::try_from(major).map_or(usize::MAX, |n| n.saturating_add(1))
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (narrow(self.x), narrow(self.y));
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line {}

impl FusedIterator for Line {}

#[cfg(test)]
mod tests {
    use super::Line;

    #[test]
    fn test_single_point() {
        let points: Vec<_> = Line::new((3, -2), (3, -2)).collect();
        assert_eq!(points, [(3, -2)]);
    }

    #[test]
    fn test_shallow_slope() {
        let points: Vec<_> = Line::new((0, 0), (5, 2)).collect();
        assert_eq!(points, [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);

        let back: Vec<_> = Line::new((5, 2), (0, 0)).collect();
        assert_eq!(back, [(5, 2), (4, 2), (3, 1), (2, 1), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_diagonal() {
        let points: Vec<_> = Line::new((2, 2), (-1, -1)).collect();
        assert_eq!(points, [(2, 2), (1, 1), (0, 0), (-1, -1)]);
    }

    #[test]
    fn test_exact_size() {
        let mut line = Line::new((0, 0), (-7, 3));
        assert_eq!(line.len(), 8);
        line.next();
        assert_eq!(line.len(), 7);
        assert_eq!(line.by_ref().count(), 7);
        assert_eq!(line.len(), 0);
        assert_eq!(line.next(), None);
    }

    #[test]
    fn test_connected_and_unique() {
        for x1 in -6..=6 {
            for y1 in -6..=6 {
                let points: Vec<_> = Line::new((0, 0), (x1, y1)).collect();
                assert_eq!(points.first(), Some(&(0, 0)));
                assert_eq!(points.last(), Some(&(x1, y1)));
                for pair in points.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
                    assert_ne!(a, b);
                }
                let mut sorted = points.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), points.len());
            }
        }
    }
}
