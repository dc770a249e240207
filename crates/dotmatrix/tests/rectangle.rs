use dotmatrix::{Brush, Matrix, Point, Unit};

const N: i32 = 6;

fn rectangle(c0: Point, c1: Point) -> Matrix<Unit> {
    let mut m = Matrix::new(N as u32, N as u32);
    m.rectangle(c0, c1, Brush::UseDefault);
    m
}

fn corners() -> impl Iterator<Item = Point> {
    (0..N).flat_map(|y| (0..N).map(move |x| (x, y)))
}

#[test]
fn outline() {
    for c0 in corners() {
        for c1 in corners() {
            let m = rectangle(c0, c1);
            let (left, right) = (c0.0.min(c1.0), c0.0.max(c1.0));
            let (top, bottom) = (c0.1.min(c1.1), c0.1.max(c1.1));
            for (y, row) in m.rows().iter().enumerate() {
                for (x, &on) in row.iter().enumerate() {
                    let (x, y) = (x as i32, y as i32);
                    let inside = (left..=right).contains(&x) && (top..=bottom).contains(&y);
                    let edge = x == left || x == right || y == top || y == bottom;
                    assert_eq!(on, inside && edge, "{c0:?} {c1:?} at ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn corner_order() {
    for c0 in corners() {
        for c1 in corners() {
            let ((x0, y0), (x1, y1)) = (c0, c1);
            let expected = rectangle(c0, c1);
            assert_eq!(rectangle(c1, c0), expected);
            assert_eq!(rectangle((x0, y1), (x1, y0)), expected);
            assert_eq!(rectangle((x1, y0), (x0, y1)), expected);
        }
    }
}

#[test]
fn degenerate() {
    assert!(rectangle((2, 3), (2, 3)).rows()[3][2]);
    let m = rectangle((1, 1), (4, 1));
    assert_eq!(m.rows()[1], [false, true, true, true, true, false]);
}

#[test]
fn clipped() {
    let mut m: Matrix<Unit> = Matrix::new(4, 4);
    m.rectangle((-1, -1), (2, 2), Brush::UseDefault);
    let rows: Vec<Vec<bool>> = vec![
        vec![false, false, true, false],
        vec![false, false, true, false],
        vec![true, true, true, false],
        vec![false, false, false, false],
    ];
    assert_eq!(m.rows(), rows);
}
