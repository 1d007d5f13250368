//! Balance statistics for screening designs.

use std::collections::HashMap;

use super::Design;

/// A report on the level balance of a design.
///
/// A continuous factor is balanced when its high and low codes appear
/// equally often (center rows contribute midpoints, which are excluded from
/// the comparison). A categorical factor is balanced when both levels
/// appear equally often across *all* rows, center points included — this is
/// what the center-row correction exists to guarantee.
#[derive(Debug, Clone)]
pub struct BalanceReport {
    /// Whether each factor is balanced.
    pub factor_balance: Vec<bool>,
    /// The counts of each cell value for each factor.
    pub level_counts: Vec<HashMap<i32, usize>>,
}

impl BalanceReport {
    /// Whether every factor is balanced.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.factor_balance.iter().all(|&b| b)
    }
}

impl Design {
    /// Perform a balance check on all factors.
    #[must_use]
    pub fn balance_report(&self) -> BalanceReport {
        let mut factor_balance = Vec::with_capacity(self.factors());
        let mut level_counts = Vec::with_capacity(self.factors());

        for col in 0..self.factors() {
            let mut counts: HashMap<i32, usize> = HashMap::new();
            for row in 0..self.runs() {
                *counts.entry(self.get(row, col)).or_insert(0) += 1;
            }

            let balanced = if self.is_categorical(col) {
                counts.get(&1).copied().unwrap_or(0) == counts.get(&2).copied().unwrap_or(0)
            } else {
                counts.get(&1).copied().unwrap_or(0) == counts.get(&-1).copied().unwrap_or(0)
            };

            factor_balance.push(balanced);
            level_counts.push(counts);
        }

        BalanceReport {
            factor_balance,
            level_counts,
        }
    }
}
