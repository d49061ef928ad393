/// Integer matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop: each output cell is computed as a full
/// dot product before being stored, accumulating over `p` ascending. It's
/// slow on large inputs because the innermost loop walks B column-wise
/// (stride `b_cols`), but the simplicity makes it the correctness baseline
/// the rest of the crate is tested against.
///
/// Overwrites C; prior contents at written positions are discarded.
/// Arithmetic wraps on overflow.
///
/// # Arguments
///
/// * `a` - Matrix A (a_rows × a_cols), row-major
/// * `b` - Matrix B (a_cols × b_cols), row-major
/// * `c` - Matrix C (a_rows × b_cols), row-major, overwritten with A * B
/// * `a_rows` - Rows of A and C
/// * `a_cols` - Columns of A, rows of B
/// * `b_cols` - Columns of B and C
pub fn matmul_ijk(
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    a_rows: usize,
    a_cols: usize,
    b_cols: usize,
) {
    for i in 0..a_rows {
        for j in 0..b_cols {
            let mut sum = 0i32;
            for p in 0..a_cols {
                sum = sum.wrapping_add(a[i * a_cols + p].wrapping_mul(b[p * b_cols + j]));
            }
            c[i * b_cols + j] = sum;
        }
    }
}
