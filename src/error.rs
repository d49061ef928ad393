//! Shape mismatch errors for the checked multiplication entry point.

use thiserror::Error;

/// A slice length disagrees with the extents declared for it.
///
/// Each variant names the operand at fault and carries the declared extents
/// next to the actual element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// The left operand A doesn't hold `a_rows * a_cols` elements.
    #[error("A: declared {rows}x{cols}, found {found} elements")]
    LeftOperand {
        rows: usize,
        cols: usize,
        found: usize,
    },

    /// The right operand B doesn't hold `a_cols * b_cols` elements.
    #[error("B: declared {rows}x{cols}, found {found} elements")]
    RightOperand {
        rows: usize,
        cols: usize,
        found: usize,
    },

    /// The output C doesn't hold `a_rows * b_cols` elements.
    #[error("C: declared {rows}x{cols}, found {found} elements")]
    Output {
        rows: usize,
        cols: usize,
        found: usize,
    },
}
