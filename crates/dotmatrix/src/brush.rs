//! # Brush values

/// The value a drawing operation writes into the matrix
///
/// [`Brush::UseDefault`] stands for the default brush of the matrix and is
/// resolved before any pixel is written, so it never ends up in the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Brush<V> {
    /// Use the default brush of the matrix
    UseDefault,
    /// Use exactly this value
    Explicit(V),
}

impl<V> Default for Brush<V> {
    fn default() -> Self {
        Brush::UseDefault
    }
}

impl<V> From<V> for Brush<V> {
    fn from(value: V) -> Self {
        Brush::Explicit(value)
    }
}

impl<V> Brush<V> {
    /// Get the actual value, falling back to `default`
    ///
    /// ```
    /// # use dotmatrix::Brush;
    /// assert_eq!(Brush::UseDefault.resolve(true), true);
    /// assert_eq!(Brush::Explicit(false).resolve(true), false);
    /// ```
    pub fn resolve(self, default: V) -> V {
        match self {
            Brush::UseDefault => default,
            Brush::Explicit(value) => value,
        }
    }
}
