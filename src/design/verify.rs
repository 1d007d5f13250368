//! Foldover verification.
//!
//! A screening design's row order encodes its foldover structure: every
//! non-center even row must be immediately followed by its mirror trial.
//! For continuous columns the mirror is the exact negation; for categorical
//! columns it is the opposite level, except that the `orth` choice maps
//! midpoint codes of both pair members to the high level.

use super::Design;
use crate::construct::DesignChoice;

/// Result of verifying a design.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    /// Whether the design passes verification.
    pub is_valid: bool,
    /// Details about any issues found.
    pub issues: Vec<VerificationIssue>,
}

/// A specific issue found during verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationIssue {
    /// A cell holds a value outside its column's coding.
    ValueOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value found.
        value: i32,
    },
    /// A non-center even row is not followed by its mirror trial.
    BrokenFoldPair {
        /// The even row whose successor fails the mirror check.
        row: usize,
        /// The first column where the mirror check fails.
        col: usize,
    },
}

/// Verify cell ranges and the foldover pairing of a design.
#[must_use]
pub fn verify_foldover(design: &Design) -> VerificationResult {
    let mut issues = Vec::new();

    check_ranges(design, &mut issues);
    if issues.is_empty() {
        check_pairs(design, &mut issues);
    }

    VerificationResult {
        is_valid: issues.is_empty(),
        issues,
    }
}

fn check_ranges(design: &Design, issues: &mut Vec<VerificationIssue>) {
    for row in 0..design.runs() {
        for col in 0..design.factors() {
            let value = design.get(row, col);
            let ok = if design.is_categorical(col) {
                value == 1 || value == 2
            } else {
                (-1..=1).contains(&value)
            };
            if !ok {
                issues.push(VerificationIssue::ValueOutOfRange { row, col, value });
            }
        }
    }
}

fn check_pairs(design: &Design, issues: &mut Vec<VerificationIssue>) {
    let fold_rows = design.params().fold_rows();
    let mut row = 0;
    while row + 1 < fold_rows {
        if let Some(col) = (0..design.factors()).find(|&col| !mirrors(design, row, col)) {
            issues.push(VerificationIssue::BrokenFoldPair { row, col });
        }
        row += 2;
    }
}

fn mirrors(design: &Design, row: usize, col: usize) -> bool {
    let a = design.get(row, col);
    let b = design.get(row + 1, col);
    if design.is_categorical(col) {
        // Levels swap across a pair; under `orth` a shared midpoint code
        // maps both members to the high level instead.
        b == 3 - a || (design.choice() == DesignChoice::Orth && a == 2 && b == 2)
    } else {
        b == -a
    }
}
