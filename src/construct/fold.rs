//! Center-point augmentation and foldover interleaving.

use ndarray::Array2;

use super::DesignChoice;

/// Number of all-zero center rows appended for a given categorical count.
pub(crate) fn center_row_count(n_categorical: usize, choice: DesignChoice) -> usize {
    match (n_categorical, choice) {
        (0, _) => 1,
        (1, _) => 2,
        (_, DesignChoice::Dsd) => 2,
        (_, DesignChoice::Orth) => 4,
    }
}

/// Append `count` all-zero rows below the base design.
pub(crate) fn append_center_rows(f: &Array2<i32>, count: usize) -> Array2<i32> {
    let (rows, cols) = f.dim();
    let mut out = Array2::zeros((rows + count, cols));
    for i in 0..rows {
        for j in 0..cols {
            out[[i, j]] = f[[i, j]];
        }
    }
    out
}

/// Interleave the two mirrored halves of the base rows so every foldover
/// pair sits on adjacent rows: row `2k` comes from the first half, row
/// `2k + 1` from the second. Center rows keep their trailing positions.
pub(crate) fn fold_interleave(f: &Array2<i32>, base_rows: usize) -> Array2<i32> {
    debug_assert!(base_rows % 2 == 0, "base row count must be even");
    let half = base_rows / 2;
    let cols = f.ncols();

    let mut out = f.clone();
    for k in 0..half {
        for j in 0..cols {
            out[[2 * k, j]] = f[[k, j]];
            out[[2 * k + 1, j]] = f[[half + k, j]];
        }
    }
    out
}
