//! Validated override designs for specific factor totals.
//!
//! For 9, 10, 15, 16, 25 and 26 total factors the generic conference-matrix
//! recipe does not reproduce the published designs, so the base builder
//! substitutes these constants instead (Jones & Nachtsheim, 2011/2013).
//! Totals 9, 15 and 25 reuse the next-larger table; the pipeline truncates
//! the surplus columns.

use ndarray::Array2;

use super::paley::paley_matrix;

/// 20-run design serving 9 and 10 total factors.
///
/// Rows 10..20 are the negations of rows 0..10, so folding pairs every
/// trial with its mirror.
const DSD10: [[i32; 10]; 20] = [
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, -1, -1, -1, -1, 1, 1, 1, 1],
    [1, -1, 0, -1, 1, 1, -1, -1, 1, 1],
    [1, -1, -1, 0, 1, 1, 1, 1, -1, -1],
    [1, -1, 1, 1, 0, -1, -1, 1, -1, 1],
    [1, -1, 1, 1, -1, 0, 1, -1, 1, -1],
    [1, 1, -1, 1, -1, 1, 0, -1, -1, 1],
    [1, 1, -1, 1, 1, -1, -1, 0, 1, -1],
    [1, 1, 1, -1, -1, 1, -1, 1, 0, -1],
    [1, 1, 1, -1, 1, -1, 1, -1, -1, 0],
    [0, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, 0, 1, 1, 1, 1, -1, -1, -1, -1],
    [-1, 1, 0, 1, -1, -1, 1, 1, -1, -1],
    [-1, 1, 1, 0, -1, -1, -1, -1, 1, 1],
    [-1, 1, -1, -1, 0, 1, 1, -1, 1, -1],
    [-1, 1, -1, -1, 1, 0, -1, 1, -1, 1],
    [-1, -1, 1, -1, 1, -1, 0, 1, 1, -1],
    [-1, -1, 1, -1, -1, 1, 1, 0, -1, 1],
    [-1, -1, -1, 1, 1, -1, 1, -1, 0, 1],
    [-1, -1, -1, 1, -1, 1, -1, 1, 1, 0],
];

/// Upper half of the 32-run design serving 15 and 16 total factors.
/// The lower half is the negation of this block.
const DSD16_HALF: [[i32; 16]; 16] = [
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [-1, 0, 1, 1, -1, 1, -1, -1, 1, -1, 1, 1, -1, 1, -1, -1],
    [-1, -1, 0, 1, 1, -1, 1, -1, 1, -1, -1, 1, 1, -1, 1, -1],
    [-1, -1, -1, 0, 1, 1, -1, 1, 1, -1, -1, -1, 1, 1, -1, 1],
    [-1, 1, -1, -1, 0, 1, 1, -1, 1, 1, -1, -1, -1, 1, 1, -1],
    [-1, -1, 1, -1, -1, 0, 1, 1, 1, -1, 1, -1, -1, -1, 1, 1],
    [-1, 1, -1, 1, -1, -1, 0, 1, 1, 1, -1, 1, -1, -1, -1, 1],
    [-1, 1, 1, -1, 1, -1, -1, 0, 1, 1, 1, -1, 1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, 0, 1, 1, 1, 1, 1, 1, 1],
    [-1, 1, 1, 1, -1, 1, -1, -1, -1, 0, -1, -1, 1, -1, 1, 1],
    [-1, -1, 1, 1, 1, -1, 1, -1, -1, 1, 0, -1, -1, 1, -1, 1],
    [-1, -1, -1, 1, 1, 1, -1, 1, -1, 1, 1, 0, -1, -1, 1, -1],
    [-1, 1, -1, -1, 1, 1, 1, -1, -1, -1, 1, 1, 0, -1, -1, 1],
    [-1, -1, 1, -1, -1, 1, 1, 1, -1, 1, -1, 1, 1, 0, -1, -1],
    [-1, 1, -1, 1, -1, -1, 1, 1, -1, -1, 1, -1, 1, 1, 0, -1],
    [-1, 1, 1, -1, 1, -1, -1, 1, -1, -1, -1, 1, -1, 1, 1, 0],
];

/// Starter vector of the 13×13 circulant block in the 25/26-factor design.
const STARTER_13: [i32; 13] = [-1, -1, 1, -1, 1, 1, 1, 1, 1, -1, 1, 1, 1];

/// The 20×10 override matrix as an owned array.
pub(crate) fn dsd10_matrix() -> Array2<i32> {
    let mut m = Array2::zeros((20, 10));
    for (i, row) in DSD10.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            m[[i, j]] = v;
        }
    }
    m
}

/// The 32×16 override matrix: the half table stacked above its negation.
pub(crate) fn dsd16_matrix() -> Array2<i32> {
    let mut m = Array2::zeros((32, 16));
    for (i, row) in DSD16_HALF.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            m[[i, j]] = v;
            m[[16 + i, j]] = -v;
        }
    }
    m
}

/// Build the circulant matrix of a starter vector.
///
/// Column `k` is the starter rotated left by `k`, i.e.
/// `out[i][k] = starter[(i + k) mod len]`.
pub(crate) fn circulant(starter: &[i32]) -> Array2<i32> {
    let n = starter.len();
    let mut m = Array2::zeros((n, n));
    for i in 0..n {
        for k in 0..n {
            m[[i, k]] = starter[(i + k) % n];
        }
    }
    m
}

/// 52×26 override matrix serving 25 and 26 total factors.
///
/// Assembled from the 13-element Paley matrix `A` and the circulant block
/// `B` as `C = [[A, B], [Bᵗ, −A]]`, stacked above its own negation.
pub(crate) fn dsd26_matrix() -> Array2<i32> {
    let a = paley_matrix(13);
    let b = circulant(&STARTER_13);

    let mut c = Array2::zeros((26, 26));
    for i in 0..13 {
        for j in 0..13 {
            c[[i, j]] = a[[i, j]];
            c[[i, 13 + j]] = b[[i, j]];
            c[[13 + i, j]] = b[[j, i]];
            c[[13 + i, 13 + j]] = -a[[i, j]];
        }
    }

    let mut f = Array2::zeros((52, 26));
    for i in 0..26 {
        for j in 0..26 {
            f[[i, j]] = c[[i, j]];
            f[[26 + i, j]] = -c[[i, j]];
        }
    }
    f
}

/// The override design for an exact factor total, if one exists.
pub(crate) fn override_design(n_factors: usize) -> Option<Array2<i32>> {
    match n_factors {
        9 | 10 => Some(dsd10_matrix()),
        15 | 16 => Some(dsd16_matrix()),
        25 | 26 => Some(dsd26_matrix()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsd10_fold_mirror() {
        let m = dsd10_matrix();
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(m[[10 + i, j]], -m[[i, j]], "row {} not mirrored", 10 + i);
            }
        }
    }

    #[test]
    fn test_dsd10_zero_diagonal_pattern() {
        // Each half row k has its single zero in column k.
        let m = dsd10_matrix();
        for i in 0..10 {
            let zeros: Vec<usize> = (0..10).filter(|&j| m[[i, j]] == 0).collect();
            assert_eq!(zeros, vec![i]);
        }
    }

    #[test]
    fn test_dsd16_fold_mirror() {
        let m = dsd16_matrix();
        assert_eq!(m.dim(), (32, 16));
        for i in 0..16 {
            for j in 0..16 {
                assert_eq!(m[[16 + i, j]], -m[[i, j]]);
            }
        }
    }

    #[test]
    fn test_circulant_rotation() {
        let b = circulant(&[1, 2, 3, 4]);

        assert_eq!(b.dim(), (4, 4));
        // Column 0 is the starter itself
        for i in 0..4 {
            assert_eq!(b[[i, 0]], [1, 2, 3, 4][i]);
        }
        // Column k is the starter rotated left by k
        assert_eq!(b[[0, 1]], 2);
        assert_eq!(b[[3, 1]], 1);
        assert_eq!(b[[0, 3]], 4);
        assert_eq!(b[[1, 3]], 1);
    }

    #[test]
    fn test_circulant_starter_signs() {
        let b = circulant(&STARTER_13);
        // Every row and column holds the starter's 4 lows and 9 highs.
        for i in 0..13 {
            let row_lows = (0..13).filter(|&k| b[[i, k]] == -1).count();
            let col_lows = (0..13).filter(|&k| b[[k, i]] == -1).count();
            assert_eq!(row_lows, 4);
            assert_eq!(col_lows, 4);
        }
    }

    #[test]
    fn test_dsd26_fold_mirror() {
        let m = dsd26_matrix();
        assert_eq!(m.dim(), (52, 26));
        for i in 0..26 {
            for j in 0..26 {
                assert_eq!(m[[26 + i, j]], -m[[i, j]]);
            }
        }
    }

    #[test]
    fn test_dsd26_quadrants() {
        let m = dsd26_matrix();
        let a = paley_matrix(13);
        let b = circulant(&STARTER_13);
        for i in 0..13 {
            for j in 0..13 {
                assert_eq!(m[[i, j]], a[[i, j]]);
                assert_eq!(m[[i, 13 + j]], b[[i, j]]);
                assert_eq!(m[[13 + i, j]], b[[j, i]]);
                assert_eq!(m[[13 + i, 13 + j]], -a[[i, j]]);
            }
        }
    }

    #[test]
    fn test_override_totals() {
        for n in [9, 10, 15, 16, 25, 26] {
            assert!(override_design(n).is_some(), "total {n} should override");
        }
        for n in [4, 8, 11, 14, 17, 24, 27, 30] {
            assert!(override_design(n).is_none(), "total {n} should be generic");
        }
    }
}
