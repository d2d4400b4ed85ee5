use ndarray::{Array1, Array2, s};

use super::Error;

/// Relative threshold below which a diagonal entry of `R` counts as zero,
/// in multiples of `rows * f64::EPSILON`.
const RANK_TOLERANCE: f64 = 100.0;

/// Solves `min ‖a c − b‖²` for `c` with Householder QR.
///
/// `a` must have at least as many rows as columns. Both arguments are used as
/// scratch space: `a` becomes `R` above its diagonal and `b` becomes `Qᵀ b`.
pub(super) fn least_squares(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, Error> {
    let (rows, cols) = a.dim();
    debug_assert!(rows >= cols && b.len() == rows);

    for k in 0..cols {
        let column = a.slice(s![k.., k]);
        let norm = column.dot(&column).sqrt();
        if norm == 0.0 {
            return Err(Error::RankDeficient);
        }

        // Reflect onto -sign(x0) * ‖x‖ e1 to avoid cancellation in v[0].
        let alpha = if a[[k, k]] > 0.0 { -norm } else { norm };
        let mut v = column.to_owned();
        v[0] -= alpha;
        let v_norm_sq = v.dot(&v);

        for j in k..cols {
            let factor = 2.0 * v.dot(&a.slice(s![k.., j])) / v_norm_sq;
            a.slice_mut(s![k.., j]).scaled_add(-factor, &v);
        }
        let factor = 2.0 * v.dot(&b.slice(s![k..])) / v_norm_sq;
        b.slice_mut(s![k..]).scaled_add(-factor, &v);
    }

    let largest = (0..cols).map(|k| a[[k, k]].abs()).fold(0.0, f64::max);
    let tolerance = largest * RANK_TOLERANCE * rows as f64 * f64::EPSILON;
    if (0..cols).any(|k| a[[k, k]].abs() <= tolerance) {
        return Err(Error::RankDeficient);
    }

    let mut solution = Array1::<f64>::zeros(cols);
    for i in (0..cols).rev() {
        let tail: f64 = (i + 1..cols).map(|j| a[[i, j]] * solution[j]).sum();
        solution[i] = (b[i] - tail) / a[[i, i]];
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn solves_square_system_exactly() {
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let b = array![3.0, 5.0];

        let c = least_squares(a, b).expect("should solve");

        assert_relative_eq!(c[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(c[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn overdetermined_system_averages() {
        // A single constant column: the least-squares answer is the mean.
        let a = array![[1.0], [1.0], [1.0], [1.0]];
        let b = array![1.0, 2.0, 3.0, 6.0];

        let c = least_squares(a, b).expect("should solve");

        assert_relative_eq!(c[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn duplicate_columns_are_rank_deficient() {
        let a = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let b = array![1.0, 2.0, 3.0];

        assert!(matches!(least_squares(a, b), Err(Error::RankDeficient)));
    }
}
