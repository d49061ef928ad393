//! Dense integer matrix multiplication.
//!
//! Matrices are flat `i32` slices in row-major order, with their extents
//! passed alongside: A is `a_rows × a_cols`, B is `a_cols × b_cols`, and the
//! product is written into a caller-supplied C of `a_rows × b_cols`. Prior
//! contents of C are overwritten, not accumulated into.
//!
//! Arithmetic is fixed-width 32-bit with wraparound on overflow, the same in
//! debug and release builds.
//!
//! ## Usage
//!
//! ```
//! use imatmul::multiply;
//!
//! let a = vec![1, 2, 3, 4, 5, 6]; // 2×3
//! let b = vec![7, 8, 9, 10, 11, 12]; // 3×2
//! let mut c = vec![0i32; 4];
//!
//! multiply(&a, &b, &mut c, 2, 3, 2);
//! assert_eq!(c, [58, 64, 139, 154]);
//! ```
//!
//! [`multiply`] panics if a slice length disagrees with its declared extents;
//! [`try_multiply`] reports the mismatch as a [`ShapeError`] instead.

pub mod error;
pub mod matrix;

pub use error::ShapeError;
pub use matrix::mult_ijk::matmul_ijk;
pub use matrix::mult_ikj::matmul_ikj;

/// Matrix multiply: C = A * B.
///
/// Matrices are row-major: A is `a_rows × a_cols`, B is `a_cols × b_cols`,
/// C is `a_rows × b_cols`. Any extent may be zero, in which case the
/// corresponding loops simply run zero times.
///
/// # Panics
///
/// Panics if a slice length doesn't match its declared extents.
pub fn multiply(
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    a_rows: usize,
    a_cols: usize,
    b_cols: usize,
) {
    assert_eq!(
        a.len(),
        a_rows * a_cols,
        "A: expected {}x{}={} elements",
        a_rows,
        a_cols,
        a_rows * a_cols
    );
    assert_eq!(
        b.len(),
        a_cols * b_cols,
        "B: expected {}x{}={} elements",
        a_cols,
        b_cols,
        a_cols * b_cols
    );
    assert_eq!(
        c.len(),
        a_rows * b_cols,
        "C: expected {}x{}={} elements",
        a_rows,
        b_cols,
        a_rows * b_cols
    );

    matrix::mult_ikj::matmul_ikj(a, b, c, a_rows, a_cols, b_cols);
}

/// Same as [`multiply`] but reports shape mismatches as a [`ShapeError`]
/// instead of panicking.
///
/// On error nothing has been written to `c`.
pub fn try_multiply(
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    a_rows: usize,
    a_cols: usize,
    b_cols: usize,
) -> Result<(), ShapeError> {
    if a.len() != a_rows * a_cols {
        return Err(ShapeError::LeftOperand {
            rows: a_rows,
            cols: a_cols,
            found: a.len(),
        });
    }
    if b.len() != a_cols * b_cols {
        return Err(ShapeError::RightOperand {
            rows: a_cols,
            cols: b_cols,
            found: b.len(),
        });
    }
    if c.len() != a_rows * b_cols {
        return Err(ShapeError::Output {
            rows: a_rows,
            cols: b_cols,
            found: c.len(),
        });
    }

    matrix::mult_ikj::matmul_ikj(a, b, c, a_rows, a_cols, b_cols);
    Ok(())
}
