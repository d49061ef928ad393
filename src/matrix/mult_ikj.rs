/// Cache-friendly integer matrix multiplication using i-k-j loop order.
///
/// Swapping the j and p loops makes the innermost loop access both B and C
/// sequentially (stride 1), which is markedly faster than the i-j-k order on
/// large matrices. Each output row is zeroed before its accumulation pass,
/// so the overall contract is still overwrite, not accumulate.
///
/// Results are bit-identical to [`matmul_ijk`](super::mult_ijk::matmul_ijk):
/// wrapping integer addition is associative and commutative, so the
/// reordered accumulation changes nothing.
///
/// # Arguments
///
/// * `a` - Matrix A (a_rows × a_cols), row-major
/// * `b` - Matrix B (a_cols × b_cols), row-major
/// * `c` - Matrix C (a_rows × b_cols), row-major, overwritten with A * B
/// * `a_rows` - Rows of A and C
/// * `a_cols` - Columns of A, rows of B
/// * `b_cols` - Columns of B and C
pub fn matmul_ikj(
    a: &[i32],
    b: &[i32],
    c: &mut [i32],
    a_rows: usize,
    a_cols: usize,
    b_cols: usize,
) {
    for i in 0..a_rows {
        c[i * b_cols..(i + 1) * b_cols].fill(0);
        for p in 0..a_cols {
            let aip = a[i * a_cols + p];
            for j in 0..b_cols {
                c[i * b_cols + j] = c[i * b_cols + j].wrapping_add(aip.wrapping_mul(b[p * b_cols + j]));
            }
        }
    }
}
