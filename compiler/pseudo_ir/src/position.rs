use std::fmt;

/// A 1-based source location.
///
/// `col` counts characters, not bytes, so carets line up under the offending
/// character when a diagnostic prints the source line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
