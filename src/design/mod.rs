//! Design matrix core types.
//!
//! ## Overview
//!
//! - [`Design`]: a computed screening design
//! - [`DesignParams`]: the parameters describing it
//!
//! A design has `runs` rows (trials) and `n_continuous + n_categorical`
//! columns (factors). Continuous columns come first and hold the codes
//! −1/0/+1; categorical columns follow and hold the level codes 1/2. Row
//! order encodes the foldover structure and is never shuffled.

mod stats;
mod verify;

pub use stats::BalanceReport;
pub use verify::{verify_foldover, VerificationIssue, VerificationResult};

use ndarray::Array2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::construct::DesignChoice;
use crate::error::{Error, Result};

/// Parameters describing a screening design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignParams {
    /// Number of trials (rows).
    pub runs: usize,
    /// Number of continuous factors (leading columns).
    pub n_continuous: usize,
    /// Number of two-level categorical factors (trailing columns).
    pub n_categorical: usize,
    /// Number of center-point rows at the end of the matrix.
    pub center_rows: usize,
    /// The design choice the matrix was built for.
    pub choice: DesignChoice,
}

impl DesignParams {
    /// Total number of factors (columns).
    #[must_use]
    pub fn factors(&self) -> usize {
        self.n_continuous + self.n_categorical
    }

    /// Number of non-center rows, i.e. the folded base design.
    #[must_use]
    pub fn fold_rows(&self) -> usize {
        self.runs - self.center_rows
    }
}

impl fmt::Display for DesignParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DSD({} runs, {} continuous + {} categorical, {})",
            self.runs, self.n_continuous, self.n_categorical, self.choice
        )
    }
}

/// A definitive screening design.
///
/// The matrix is a pure function of its construction arguments: it is
/// freshly allocated on every call, never cached and never mutated after
/// being returned.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Design {
    /// The matrix data, shape (runs, factors).
    data: Array2<i32>,
    /// Design parameters.
    params: DesignParams,
}

impl Design {
    /// Create a new design from data and parameters.
    ///
    /// # Panics
    ///
    /// Panics if the data dimensions don't match the parameters.
    #[must_use]
    pub fn new(data: Array2<i32>, params: DesignParams) -> Self {
        assert_eq!(
            data.nrows(),
            params.runs,
            "data rows {} must match params.runs {}",
            data.nrows(),
            params.runs
        );
        assert_eq!(
            data.ncols(),
            params.factors(),
            "data cols {} must match factor count {}",
            data.ncols(),
            params.factors()
        );

        Self { data, params }
    }

    /// Create a new design, validating data dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the data dimensions don't match the parameters.
    pub fn try_new(data: Array2<i32>, params: DesignParams) -> Result<Self> {
        if data.nrows() != params.runs {
            return Err(Error::DimensionMismatch {
                expected: format!("{} rows", params.runs),
                actual: format!("{} rows", data.nrows()),
            });
        }
        if data.ncols() != params.factors() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} columns", params.factors()),
                actual: format!("{} columns", data.ncols()),
            });
        }

        Ok(Self { data, params })
    }

    /// Get the number of trials (rows).
    #[must_use]
    pub fn runs(&self) -> usize {
        self.params.runs
    }

    /// Get the total number of factors (columns).
    #[must_use]
    pub fn factors(&self) -> usize {
        self.params.factors()
    }

    /// Get the number of continuous factors.
    #[must_use]
    pub fn n_continuous(&self) -> usize {
        self.params.n_continuous
    }

    /// Get the number of categorical factors.
    #[must_use]
    pub fn n_categorical(&self) -> usize {
        self.params.n_categorical
    }

    /// Get the number of trailing center-point rows.
    #[must_use]
    pub fn center_rows(&self) -> usize {
        self.params.center_rows
    }

    /// Get the design choice the matrix was built for.
    #[must_use]
    pub fn choice(&self) -> DesignChoice {
        self.params.choice
    }

    /// Get the parameters.
    #[must_use]
    pub fn params(&self) -> &DesignParams {
        &self.params
    }

    /// Whether a column holds a categorical factor.
    #[must_use]
    pub fn is_categorical(&self, col: usize) -> bool {
        col >= self.params.n_continuous
    }

    /// Get a reference to the underlying data.
    #[must_use]
    pub fn data(&self) -> &Array2<i32> {
        &self.data
    }

    /// Consume the design and return the underlying data.
    #[must_use]
    pub fn into_data(self) -> Array2<i32> {
        self.data
    }

    /// Get the value at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[[row, col]]
    }

    /// Get a row of the design.
    #[must_use]
    pub fn row(&self, idx: usize) -> ndarray::ArrayView1<'_, i32> {
        self.data.row(idx)
    }

    /// Get a column of the design.
    #[must_use]
    pub fn column(&self, idx: usize) -> ndarray::ArrayView1<'_, i32> {
        self.data.column(idx)
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, i32>> {
        self.data.rows().into_iter()
    }

    /// Verify the foldover pairing and cell ranges of this design.
    #[must_use]
    pub fn verify(&self) -> VerificationResult {
        verify_foldover(self)
    }
}

impl fmt::Debug for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with data {:?}", self.params, self.data)
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.params)?;
        for row in self.data.rows() {
            let row_str: Vec<String> = row.iter().map(|v| format!("{v:>2}")).collect();
            writeln!(f, "  {}", row_str.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn small_params() -> DesignParams {
        DesignParams {
            runs: 3,
            n_continuous: 1,
            n_categorical: 1,
            center_rows: 1,
            choice: DesignChoice::Dsd,
        }
    }

    #[test]
    fn test_params_accessors() {
        let params = small_params();
        assert_eq!(params.factors(), 2);
        assert_eq!(params.fold_rows(), 2);
    }

    #[test]
    fn test_params_display() {
        let params = small_params();
        assert_eq!(
            params.to_string(),
            "DSD(3 runs, 1 continuous + 1 categorical, dsd)"
        );
    }

    #[test]
    fn test_design_creation() {
        let data = Array2::from_shape_vec((3, 2), vec![1, 2, -1, 1, 0, 1]).unwrap();
        let design = Design::new(data, small_params());

        assert_eq!(design.runs(), 3);
        assert_eq!(design.factors(), 2);
        assert_eq!(design.get(0, 1), 2);
        assert!(!design.is_categorical(0));
        assert!(design.is_categorical(1));
    }

    #[test]
    fn test_try_new_dimension_mismatch() {
        let data = Array2::from_shape_vec((2, 2), vec![1, 2, -1, 1]).unwrap();
        let err = Design::try_new(data, small_params()).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }
}
