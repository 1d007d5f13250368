//! Definitive screening design construction.
//!
//! The pipeline is a sequence of pure transformations over a signed matrix:
//!
//! 1. **Base design** — bordered Paley conference matrix stacked above its
//!    negation, or a validated override table for totals 9/10/15/16/25/26.
//! 2. **Column truncation** — override tables and odd-order conference
//!    matrices carry surplus columns; the leading `n` are kept.
//! 3. **Center augmentation** — all-zero center-point rows are appended.
//! 4. **Fold interleaving** — the mirrored halves are interleaved so every
//!    foldover pair occupies adjacent rows.
//! 5. **Categorical correction** — center rows of categorical columns are
//!    overwritten with a fixed balancing block.
//! 6. **Level mapping** — categorical ±1/0 codes become level codes {1, 2}.
//!
//! Each invocation is independent and deterministic; the same arguments
//! always produce the same matrix.

mod categorical;
mod conference;
mod fold;
mod overrides;
mod paley;

pub use paley::{paley_matrix, LegendreTable};

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::design::{Design, DesignParams};
use crate::error::{Error, Result};

/// How categorical factors are worked into the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DesignChoice {
    /// De-alias all two-factor interactions with categorical factors.
    #[default]
    Dsd,
    /// Make an orthogonal main-effects plan.
    Orth,
}

impl DesignChoice {
    /// The wire name of this choice (`"dsd"` or `"orth"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dsd => "dsd",
            Self::Orth => "orth",
        }
    }
}

impl fmt::Display for DesignChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dsd" => Ok(Self::Dsd),
            "orth" => Ok(Self::Orth),
            other => Err(Error::UnknownDesignChoice(other.to_owned())),
        }
    }
}

/// Compute a definitive screening design.
///
/// Columns are ordered continuous-then-categorical. Continuous cells hold
/// the codes −1/0/+1; categorical cells hold the level codes 1/2. Row order
/// is meaningful: every non-center even row is immediately followed by its
/// foldover mirror, and the center-point rows sit at the end.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] if `n_continuous + n_categorical` is 0.
///
/// # Examples
///
/// ```
/// use dsd::{compute_dsd, DesignChoice};
///
/// let design = compute_dsd(6, 0, DesignChoice::Dsd).unwrap();
/// assert_eq!(design.runs(), 13);
/// assert_eq!(design.factors(), 6);
///
/// let design = compute_dsd(3, 2, DesignChoice::Dsd).unwrap();
/// assert_eq!(design.runs(), 14);
/// ```
pub fn compute_dsd(
    n_continuous: usize,
    n_categorical: usize,
    choice: DesignChoice,
) -> Result<Design> {
    let n_factors = n_continuous + n_categorical;
    if n_factors == 0 {
        return Err(Error::invalid_params("at least one factor is required"));
    }

    let mut f = conference::base_design(n_factors);
    if f.ncols() > n_factors {
        f = truncate_columns(&f, n_factors);
    }

    let base_rows = f.nrows();
    let center_rows = fold::center_row_count(n_categorical, choice);
    let f = fold::append_center_rows(&f, center_rows);
    let mut f = fold::fold_interleave(&f, base_rows);

    categorical::correct_center_rows(&mut f, n_continuous, n_categorical, choice, base_rows);
    categorical::map_categorical_levels(&mut f, n_continuous, choice);

    let params = DesignParams {
        runs: f.nrows(),
        n_continuous,
        n_categorical,
        center_rows,
        choice,
    };
    Ok(Design::new(f, params))
}

/// Number of trials `compute_dsd` will return, without building the matrix.
pub(crate) fn trial_count(
    n_factors: usize,
    n_categorical: usize,
    choice: DesignChoice,
) -> usize {
    conference::base_row_count(n_factors) + fold::center_row_count(n_categorical, choice)
}

/// Keep the leading `n` columns.
fn truncate_columns(f: &Array2<i32>, n: usize) -> Array2<i32> {
    let rows = f.nrows();
    let mut out = Array2::zeros((rows, n));
    for i in 0..rows {
        for j in 0..n {
            out[[i, j]] = f[[i, j]];
        }
    }
    out
}
