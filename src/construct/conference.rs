//! Conference-matrix base designs.
//!
//! The base design for `n` factors is a bordered Paley matrix stacked above
//! its own negation, except for the totals covered by the override tables.
//! Columns are not truncated here; the pipeline trims the surplus.

use ndarray::Array2;

use super::overrides::override_design;
use super::paley::paley_matrix;
use crate::utils::is_prime;

/// Size of the Paley kernel backing the generic design for `n` factors.
///
/// Starts from `n` (odd) or `n − 1` (even) and walks odd candidates upward
/// until the primality oracle accepts one. The supported factor range never
/// needs more than a few steps.
pub(crate) fn conference_order(n_factors: usize) -> usize {
    let mut p = if n_factors % 2 == 0 {
        n_factors - 1
    } else {
        n_factors
    };
    while !is_prime(p as u32) {
        p += 2;
    }
    p
}

/// The generic base design: border the Paley matrix of size `p` with a
/// leading `[0, 1, …, 1]` row and column, then stack the bordered block
/// above its negation. `2(p + 1)` rows, `p + 1` columns.
fn generic_base(n_factors: usize) -> Array2<i32> {
    let p = conference_order(n_factors);
    let paley = paley_matrix(p as u32);
    let half = p + 1;

    let mut f = Array2::zeros((2 * half, half));
    for j in 1..half {
        f[[0, j]] = 1;
    }
    for i in 1..half {
        f[[i, 0]] = 1;
        for j in 1..half {
            f[[i, j]] = paley[[i - 1, j - 1]];
        }
    }
    for i in 0..half {
        for j in 0..half {
            f[[half + i, j]] = -f[[i, j]];
        }
    }
    f
}

/// Signed base design for `n` total factors, before column truncation,
/// center augmentation and folding.
pub(crate) fn base_design(n_factors: usize) -> Array2<i32> {
    override_design(n_factors).unwrap_or_else(|| generic_base(n_factors))
}

/// Row count of the base design without building it.
pub(crate) fn base_row_count(n_factors: usize) -> usize {
    match n_factors {
        9 | 10 => 20,
        15 | 16 => 32,
        25 | 26 => 52,
        _ => 2 * (conference_order(n_factors) + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_order() {
        assert_eq!(conference_order(4), 3);
        assert_eq!(conference_order(5), 5);
        assert_eq!(conference_order(6), 5);
        assert_eq!(conference_order(7), 7);
        assert_eq!(conference_order(8), 7);
        assert_eq!(conference_order(11), 11);
        assert_eq!(conference_order(12), 11);
        assert_eq!(conference_order(14), 13);
        // 27 and 28 both step past the composite 27 up to 29
        assert_eq!(conference_order(27), 29);
        assert_eq!(conference_order(28), 29);
        assert_eq!(conference_order(30), 29);
    }

    #[test]
    fn test_conference_order_tiny_totals() {
        // 1 is rejected by the oracle, so the search lands on 3.
        assert_eq!(conference_order(1), 3);
        assert_eq!(conference_order(2), 3);
    }

    #[test]
    fn test_generic_base_border() {
        let f = base_design(6); // p = 5, 12×6
        assert_eq!(f.dim(), (12, 6));

        assert_eq!(f[[0, 0]], 0);
        for j in 1..6 {
            assert_eq!(f[[0, j]], 1, "border row");
        }
        for i in 1..6 {
            assert_eq!(f[[i, 0]], 1, "border column");
        }
    }

    #[test]
    fn test_generic_base_kernel_is_paley() {
        let f = base_design(8); // p = 7
        let paley = paley_matrix(7);
        for i in 0..7 {
            for j in 0..7 {
                assert_eq!(f[[1 + i, 1 + j]], paley[[i, j]]);
            }
        }
    }

    #[test]
    fn test_generic_base_mirror_halves() {
        for n in [4usize, 5, 6, 7, 8, 12, 14, 20, 30] {
            let f = base_design(n);
            let (rows, cols) = f.dim();
            assert_eq!(rows % 2, 0);
            let half = rows / 2;
            for i in 0..half {
                for j in 0..cols {
                    assert_eq!(f[[half + i, j]], -f[[i, j]], "n={n}");
                }
            }
        }
    }

    #[test]
    fn test_base_row_count_matches_built() {
        for n in 1..=30 {
            let f = base_design(n);
            assert_eq!(f.nrows(), base_row_count(n), "n={n}");
        }
    }

    #[test]
    fn test_override_totals_have_expected_shapes() {
        assert_eq!(base_design(9).dim(), (20, 10));
        assert_eq!(base_design(10).dim(), (20, 10));
        assert_eq!(base_design(15).dim(), (32, 16));
        assert_eq!(base_design(16).dim(), (32, 16));
        assert_eq!(base_design(25).dim(), (52, 26));
        assert_eq!(base_design(26).dim(), (52, 26));
    }
}
