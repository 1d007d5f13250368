//! Categorical-column handling: center-row correction and level mapping.
//!
//! Continuous factors sit at their midpoint (code 0) in center rows, but a
//! two-level categorical factor has no midpoint. The corrector overwrites
//! the center rows of categorical columns with a fixed ±1 block so each
//! level keeps an equal share of the trials, and the mapper then rewrites
//! the ±1/0 codes of categorical columns into level codes {1, 2}.

use ndarray::Array2;

use super::DesignChoice;

/// Center-row block for the `dsd` choice. All three columns are identical;
/// the column selection below cycles through them anyway, matching the
/// validated reference output.
const DSD_CENTER_BLOCK: [[i32; 3]; 2] = [[-1, -1, -1], [1, 1, 1]];

/// Center-row block for the `orth` choice.
const ORTH_CENTER_BLOCK: [[i32; 4]; 4] = [
    [-1, -1, -1, 1],
    [-1, -1, 1, -1],
    [-1, 1, -1, -1],
    [1, -1, -1, -1],
];

/// Block column assigned to a categorical factor.
///
/// The reference construction offsets the factor's categorical position by
/// one before reducing, so the first categorical factor lands on the last
/// block column.
fn center_block_column(factor: usize, n_continuous: usize, width: usize) -> usize {
    (factor - n_continuous + width - 1) % width
}

/// Level a zero code maps to, by trial-row parity: even rows take the low
/// level, odd rows the high one. Folded pairs share their zero positions,
/// so parity keeps the two levels complementary across each pair.
fn parity_level(row: usize) -> i32 {
    if row % 2 == 0 {
        1
    } else {
        2
    }
}

/// Overwrite the center rows of every categorical column with the fixed
/// balancing block. Applies only when there is more than one categorical
/// factor; with zero or one, the center rows stay at zero and the level
/// mapper resolves them by parity.
pub(crate) fn correct_center_rows(
    f: &mut Array2<i32>,
    n_continuous: usize,
    n_categorical: usize,
    choice: DesignChoice,
    first_center: usize,
) {
    if n_categorical < 2 {
        return;
    }

    let n_factors = n_continuous + n_categorical;
    for factor in n_continuous..n_factors {
        match choice {
            DesignChoice::Dsd => {
                let col = center_block_column(factor, n_continuous, 3);
                for (offset, row) in DSD_CENTER_BLOCK.iter().enumerate() {
                    f[[first_center + offset, factor]] = row[col];
                }
            }
            DesignChoice::Orth => {
                let col = center_block_column(factor, n_continuous, 4);
                for (offset, row) in ORTH_CENTER_BLOCK.iter().enumerate() {
                    f[[first_center + offset, factor]] = row[col];
                }
            }
        }
    }
}

/// Rewrite ±1/0 codes of categorical columns into level codes {1, 2}:
/// `+1 → 2`, `−1 → 1`, and `0` resolved by row parity for `dsd` or to the
/// high level for `orth`.
pub(crate) fn map_categorical_levels(
    f: &mut Array2<i32>,
    n_continuous: usize,
    choice: DesignChoice,
) {
    let (rows, cols) = f.dim();
    for factor in n_continuous..cols {
        for row in 0..rows {
            f[[row, factor]] = match f[[row, factor]] {
                1 => 2,
                -1 => 1,
                _ => match choice {
                    DesignChoice::Dsd => parity_level(row),
                    DesignChoice::Orth => 2,
                },
            };
        }
    }
}
