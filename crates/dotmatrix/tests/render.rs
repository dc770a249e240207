use dotmatrix::{Block, Brush, Matrix, MatrixError, Unit};

#[test]
fn blank_braille() {
    let m: Matrix = Matrix::new(2, 4);
    assert_eq!(m.render(), "\u{2800}");
    let m: Matrix = Matrix::new(4, 5);
    assert_eq!(m.render(), "\u{2800}\u{2800}\n\u{2800}\u{2800}");
    let m: Matrix = Matrix::new(0, 0);
    assert_eq!(m.render(), "");
}

#[test]
fn render_is_pure() {
    let mut m: Matrix = Matrix::new(10, 10);
    m.circle((5, 5), 4, Brush::UseDefault);
    let first = m.render();
    assert_eq!(m.render(), first);
    assert_eq!(m.to_string(), first);
}

#[test]
fn braille_rectangle() {
    let mut m: Matrix = Matrix::new(4, 4);
    m.rectangle((0, 0), (3, 3), Brush::UseDefault);
    // dots 1, 2, 3, 4, 7, 8 and 1, 4, 5, 6, 7, 8
    assert_eq!(m.render(), "\u{28CF}\u{28F9}");
}

#[test]
fn block_cells() {
    let mut m: Matrix<Block> = Matrix::new(4, 4);
    m.line((0, 0), (3, 0), Brush::UseDefault);
    m.line((0, 3), (3, 3), Brush::UseDefault);
    assert_eq!(m.render(), "▀▀▀▀\n▄▄▄▄");
    m.fill(true);
    assert_eq!(m.render(), "████\n████");
}

#[test]
fn unit_chars() {
    let display = Unit::with_chars(3, 3, Brush::UseDefault, "-", "o");
    let mut m = Matrix::with_display(3, 3, display, Brush::UseDefault).unwrap();
    m.circle((1, 1), 1, Brush::UseDefault);
    assert_eq!(m.render(), "-o-\no-o\n-o-");
}

#[test]
fn curve_errors() {
    let mut m: Matrix = Matrix::new(8, 8);
    for points in [&[][..], &[(3, 3)][..]] {
        assert_eq!(
            m.curve(points, None, Brush::UseDefault),
            Err(MatrixError::InsufficientControlPoints(points.len()))
        );
    }
    assert_eq!(m.render(), Matrix::<dotmatrix::Braille>::new(8, 8).render());
}

#[test]
fn curve_of_two_points() {
    for steps in [None, Some(0), Some(1), Some(2), Some(5)] {
        let mut curve: Matrix = Matrix::new(16, 8);
        curve
            .curve(&[(1, 1), (13, 1)], steps, Brush::UseDefault)
            .unwrap();
        let mut line: Matrix = Matrix::new(16, 8);
        line.line((1, 1), (13, 1), Brush::UseDefault);
        assert_eq!(curve.render(), line.render(), "steps: {steps:?}");
    }
}
