//! Legendre symbol tables and Paley matrix construction.
//!
//! The Paley matrix of an odd prime `q` is the quadratic-residue kernel of
//! the conference matrices used by the base design builder. Its entries are
//! symbols of pairwise index differences over the prime field GF(q).
//!
//! ## Sign convention
//!
//! The symbol used here is the *negation* of the classical Legendre symbol:
//! a nonzero quadratic residue maps to −1 and a non-residue to +1. The
//! validated reference designs are defined in terms of this convention, so
//! it must be preserved exactly.

use ndarray::Array2;

/// Quadratic-residue symbol table for the prime field GF(q).
///
/// Precomputes the set of nonzero squared residues `{x² mod q}` so that
/// symbol lookups are O(1).
///
/// # Example
///
/// ```
/// use dsd::construct::LegendreTable;
///
/// // Quadratic residues mod 7 are {1, 2, 4}
/// let table = LegendreTable::new(7);
/// assert_eq!(table.symbol(0), 0);
/// assert_eq!(table.symbol(1), -1);
/// assert_eq!(table.symbol(3), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LegendreTable {
    q: u32,
    residue: Vec<bool>,
}

impl LegendreTable {
    /// Build the residue table for the prime field of size `q`.
    ///
    /// `q` must be an odd prime; this is the caller's responsibility
    /// (the base design builder only passes primes found by the oracle).
    #[must_use]
    pub fn new(q: u32) -> Self {
        let mut residue = vec![false; q as usize];
        for x in 1..q {
            let sq = (u64::from(x) * u64::from(x)) % u64::from(q);
            residue[sq as usize] = true;
        }
        Self { q, residue }
    }

    /// The field size this table was built for.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.q
    }

    /// Symbol of a field-element difference.
    ///
    /// Returns 0 if `d ≡ 0 (mod q)`, −1 if the reduced difference is a
    /// nonzero quadratic residue, and +1 otherwise.
    #[must_use]
    pub fn symbol(&self, d: u32) -> i32 {
        let d = d % self.q;
        if d == 0 {
            0
        } else if self.residue[d as usize] {
            -1
        } else {
            1
        }
    }
}

/// Build the q×q Paley matrix for an odd prime `q`.
///
/// The upper triangle holds `symbol(j − i)` (zero diagonal); the matrix is
/// then completed as `P + factor · Pᵗ` where `factor = −1` if
/// `q ≡ 3 (mod 4)` and `+1` otherwise. The result is skew for
/// `q ≡ 3 (mod 4)` and symmetric for `q ≡ 1 (mod 4)`.
///
/// # Example
///
/// ```
/// use dsd::construct::paley_matrix;
///
/// let p = paley_matrix(3);
/// assert_eq!(p[[0, 1]], -1); // 1 is a residue mod 3
/// assert_eq!(p[[1, 0]], 1);  // skew: q ≡ 3 (mod 4)
/// ```
#[must_use]
pub fn paley_matrix(q: u32) -> Array2<i32> {
    let table = LegendreTable::new(q);
    let n = q as usize;
    let mut m = Array2::zeros((n, n));

    for i in 0..n {
        for j in i..n {
            m[[i, j]] = table.symbol((j - i) as u32);
        }
    }

    let factor = if q % 4 == 3 { -1 } else { 1 };
    for i in 0..n {
        for j in 0..i {
            m[[i, j]] = factor * m[[j, i]];
        }
    }

    m
}
