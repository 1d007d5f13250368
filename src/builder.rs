//! Builder for named-factor design tables.
//!
//! The builder is the bridge between coded design matrices and the tables
//! an experimenter actually runs: it accepts factor counts or an explicit
//! ordered factor list, pads small designs with hidden fake factors to
//! reach a minimum trial count, invokes the core construction, and
//! substitutes the ±1/0 and level codes with the supplied settings.
//!
//! # Example
//!
//! ```
//! use dsd::DsdBuilder;
//!
//! let table = DsdBuilder::new()
//!     .factor("temperature", vec![20.0.into(), 80.0.into()])
//!     .factor("stirred", vec![false.into(), true.into()])
//!     .factor("ph", vec![5.0.into(), 9.0.into()])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.names(), &["temperature", "stirred", "ph"]);
//! assert!(table.rows() >= 13);
//! ```

use crate::construct::{compute_dsd, trial_count, DesignChoice};
use crate::design::Design;
use crate::error::{Error, Result};
use crate::table::{DesignTable, LevelValue};

/// A factor resolved to its kind and settings.
#[derive(Debug, Clone)]
enum FactorKind {
    Continuous { low: f64, high: f64 },
    Categorical { first: LevelValue, second: LevelValue },
}

#[derive(Debug, Clone)]
struct ResolvedFactor {
    name: String,
    kind: FactorKind,
}

/// Builder for definitive screening design tables.
///
/// Factors are supplied either as counts (synthetic `X01…`/`C01…` names
/// with coded settings) or as an explicit ordered list of named
/// two-element specifications. A specification is categorical when its
/// first level is a label or flag, continuous when it is a number.
///
/// # Example
///
/// ```
/// use dsd::{DesignChoice, DsdBuilder};
///
/// let table = DsdBuilder::new()
///     .continuous(3)
///     .categorical(2)
///     .design_choice(DesignChoice::Dsd)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.shape(), (14, 5));
/// ```
#[derive(Debug, Clone)]
pub struct DsdBuilder {
    continuous: usize,
    categorical: usize,
    factors: Vec<(String, Vec<LevelValue>)>,
    choice: DesignChoice,
    min_trials: bool,
    fake_factors: Option<usize>,
}

impl Default for DsdBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DsdBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            continuous: 0,
            categorical: 0,
            factors: Vec::new(),
            choice: DesignChoice::default(),
            min_trials: true,
            fake_factors: None,
        }
    }

    /// Set the number of continuous factors (synthetic names, coded levels).
    #[must_use]
    pub fn continuous(mut self, n: usize) -> Self {
        self.continuous = n;
        self
    }

    /// Set the number of categorical factors (synthetic names, coded levels).
    #[must_use]
    pub fn categorical(mut self, n: usize) -> Self {
        self.categorical = n;
        self
    }

    /// Append a named factor with its two-element level specification.
    ///
    /// The factor is categorical when the first level is a
    /// [`Label`](LevelValue::Label) or [`Flag`](LevelValue::Flag), and
    /// continuous when it is a [`Number`](LevelValue::Number).
    #[must_use]
    pub fn factor(mut self, name: impl Into<String>, levels: Vec<LevelValue>) -> Self {
        self.factors.push((name.into(), levels));
        self
    }

    /// Set the design choice. Defaults to [`DesignChoice::Dsd`].
    #[must_use]
    pub fn design_choice(mut self, choice: DesignChoice) -> Self {
        self.choice = choice;
        self
    }

    /// Whether small designs are padded with hidden fake continuous factors
    /// until they reach at least 13 trials. Defaults to `true`.
    #[must_use]
    pub fn min_trials(mut self, enabled: bool) -> Self {
        self.min_trials = enabled;
        self
    }

    /// Use exactly this many fake continuous factors, bypassing the
    /// automatic minimum-trial padding.
    #[must_use]
    pub fn fake_factors(mut self, n: usize) -> Self {
        self.fake_factors = Some(n);
        self
    }

    /// Build the design table.
    ///
    /// # Errors
    ///
    /// Returns an error if a factor specification does not have exactly two
    /// levels, mixes numeric and non-numeric levels for a continuous
    /// factor, if fewer than two continuous factors are supplied, or if
    /// both factor counts and an explicit factor list were given.
    pub fn build(self) -> Result<DesignTable> {
        let specs = self.resolve_factors()?;

        let n_cont = specs
            .iter()
            .filter(|s| matches!(s.kind, FactorKind::Continuous { .. }))
            .count();
        let n_cat = specs.len() - n_cont;

        if n_cont < 2 {
            return Err(Error::invalid_params(
                "a screening design needs at least 2 continuous factors",
            ));
        }

        let n_fake = self.fake_factors.unwrap_or_else(|| {
            if self.min_trials {
                fake_factor_count(n_cont + n_cat, n_cat, self.choice)
            } else {
                0
            }
        });

        let design = compute_dsd(n_cont + n_fake, n_cat, self.choice)?;
        Ok(substitute(&design, &specs, n_cont, n_fake))
    }

    /// Validate and classify the factor list, synthesizing one from counts
    /// when no explicit factors were given.
    fn resolve_factors(&self) -> Result<Vec<ResolvedFactor>> {
        if self.factors.is_empty() {
            let mut specs = Vec::with_capacity(self.continuous + self.categorical);
            for i in 1..=self.continuous {
                specs.push(ResolvedFactor {
                    name: format!("X{i:02}"),
                    kind: FactorKind::Continuous {
                        low: -1.0,
                        high: 1.0,
                    },
                });
            }
            for i in 1..=self.categorical {
                specs.push(ResolvedFactor {
                    name: format!("C{i:02}"),
                    kind: FactorKind::Categorical {
                        first: LevelValue::Number(1.0),
                        second: LevelValue::Number(2.0),
                    },
                });
            }
            return Ok(specs);
        }

        if self.continuous != 0 || self.categorical != 0 {
            return Err(Error::invalid_params(
                "specify factor counts or an explicit factor list, not both",
            ));
        }

        self.factors
            .iter()
            .map(|(name, levels)| {
                if levels.len() != 2 {
                    return Err(Error::BadFactorLevels {
                        name: name.clone(),
                        count: levels.len(),
                    });
                }
                let kind = match (&levels[0], &levels[1]) {
                    (LevelValue::Number(low), LevelValue::Number(high)) => {
                        FactorKind::Continuous {
                            low: *low,
                            high: *high,
                        }
                    }
                    (LevelValue::Number(_), _) => {
                        return Err(Error::invalid_params(format!(
                            "continuous factor {name:?} mixes numeric and non-numeric levels"
                        )));
                    }
                    (first, second) => FactorKind::Categorical {
                        first: first.clone(),
                        second: second.clone(),
                    },
                };
                Ok(ResolvedFactor {
                    name: name.clone(),
                    kind,
                })
            })
            .collect()
    }
}

/// Fake continuous factors needed to reach 13 trials.
///
/// Padding only ever applies below 6 named factors; larger designs clear
/// 13 trials on their own.
fn fake_factor_count(n_factors: usize, n_categorical: usize, choice: DesignChoice) -> usize {
    let mut fake = 0;
    while n_factors + fake < 6 && trial_count(n_factors + fake, n_categorical, choice) < 13 {
        fake += 1;
    }
    fake
}

/// Substitute codes with factor settings and restore the caller's column
/// order. Fake-factor columns sit between the real continuous and the
/// categorical block and are dropped here.
fn substitute(
    design: &Design,
    specs: &[ResolvedFactor],
    n_cont: usize,
    n_fake: usize,
) -> DesignTable {
    let runs = design.runs();
    let mut names = Vec::with_capacity(specs.len());
    let mut columns = Vec::with_capacity(specs.len());

    let mut cont_seen = 0;
    let mut cat_seen = 0;
    for spec in specs {
        let column = match &spec.kind {
            FactorKind::Continuous { low, high } => {
                let col = cont_seen;
                cont_seen += 1;
                (0..runs)
                    .map(|row| {
                        let value = match design.get(row, col) {
                            -1 => *low,
                            1 => *high,
                            _ => (low + high) / 2.0,
                        };
                        LevelValue::Number(value)
                    })
                    .collect()
            }
            FactorKind::Categorical { first, second } => {
                let col = n_cont + n_fake + cat_seen;
                cat_seen += 1;
                (0..runs)
                    .map(|row| {
                        if design.get(row, col) == 1 {
                            first.clone()
                        } else {
                            second.clone()
                        }
                    })
                    .collect()
            }
        };
        names.push(spec.name.clone());
        columns.push(column);
    }

    DesignTable::new(names, columns)
}

/// Generate a definitive screening design table from factor counts.
///
/// Shorthand for the builder with minimum-trial padding enabled.
///
/// # Errors
///
/// Returns an error for fewer than 2 continuous factors.
///
/// # Example
///
/// ```
/// use dsd::{generate, DesignChoice};
///
/// let table = generate(10, 0, DesignChoice::Dsd).unwrap();
/// assert_eq!(table.shape(), (21, 10));
/// ```
pub fn generate(
    n_continuous: usize,
    n_categorical: usize,
    choice: DesignChoice,
) -> Result<DesignTable> {
    DsdBuilder::new()
        .continuous(n_continuous)
        .categorical(n_categorical)
        .design_choice(choice)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shapes() {
        // Three continuous and two categorical factors already clear 13
        // trials, so no fake factors are added.
        let table = generate(3, 2, DesignChoice::Dsd).unwrap();
        assert_eq!(table.shape(), (14, 5));
        assert_eq!(table.names(), &["X01", "X02", "X03", "C01", "C02"]);

        let table = generate(10, 0, DesignChoice::Dsd).unwrap();
        assert_eq!(table.shape(), (21, 10));
    }

    #[test]
    fn test_generate_coded_defaults() {
        let table = generate(3, 2, DesignChoice::Dsd).unwrap();

        for value in table.column("X01").unwrap() {
            let v = value.as_number().unwrap();
            assert!(v == -1.0 || v == 0.0 || v == 1.0);
        }
        for value in table.column("C02").unwrap() {
            let v = value.as_number().unwrap();
            assert!(v == 1.0 || v == 2.0);
        }
    }

    #[test]
    fn test_min_trials_padding() {
        // Two continuous factors alone give 9 trials; padding lifts the
        // total to 5 factors and 13 trials without exposing fake columns.
        let table = generate(2, 0, DesignChoice::Dsd).unwrap();
        assert_eq!(table.shape(), (13, 2));
        assert_eq!(table.names(), &["X01", "X02"]);

        for n_cont in 2..6 {
            let table = generate(n_cont, 0, DesignChoice::Dsd).unwrap();
            assert!(table.rows() >= 13, "{n_cont} factors: {} rows", table.rows());
            assert_eq!(table.shape().1, n_cont);
        }
    }

    #[test]
    fn test_min_trials_disabled() {
        let table = DsdBuilder::new()
            .continuous(2)
            .min_trials(false)
            .build()
            .unwrap();
        assert_eq!(table.shape(), (9, 2));
    }

    #[test]
    fn test_explicit_fake_factors_override() {
        let table = DsdBuilder::new()
            .continuous(2)
            .fake_factors(0)
            .build()
            .unwrap();
        assert_eq!(table.shape(), (9, 2));

        let table = DsdBuilder::new()
            .continuous(2)
            .fake_factors(4)
            .build()
            .unwrap();
        // 6 total factors: p = 5, 12 rows plus one center point.
        assert_eq!(table.shape(), (13, 2));
    }

    #[test]
    fn test_fake_factor_count() {
        assert_eq!(fake_factor_count(2, 0, DesignChoice::Dsd), 3);
        assert_eq!(fake_factor_count(3, 0, DesignChoice::Dsd), 2);
        assert_eq!(fake_factor_count(4, 0, DesignChoice::Dsd), 1);
        assert_eq!(fake_factor_count(5, 0, DesignChoice::Dsd), 0);
        assert_eq!(fake_factor_count(5, 2, DesignChoice::Dsd), 0);
        assert_eq!(fake_factor_count(4, 1, DesignChoice::Dsd), 1);
        assert_eq!(fake_factor_count(6, 0, DesignChoice::Dsd), 0);
        assert_eq!(fake_factor_count(12, 3, DesignChoice::Orth), 0);
    }

    #[test]
    fn test_range_substitution() {
        let table = DsdBuilder::new()
            .factor("temperature", vec![20.0.into(), 80.0.into()])
            .factor("pressure", vec![1.0.into(), 5.0.into()])
            .build()
            .unwrap();

        for value in table.column("temperature").unwrap() {
            let v = value.as_number().unwrap();
            assert!(v == 20.0 || v == 50.0 || v == 80.0);
        }
        for value in table.column("pressure").unwrap() {
            let v = value.as_number().unwrap();
            assert!(v == 1.0 || v == 3.0 || v == 5.0);
        }
    }

    #[test]
    fn test_label_substitution_and_order_restored() {
        let table = DsdBuilder::new()
            .factor("temp", vec![20.0.into(), 80.0.into()])
            .factor("solvent", vec!["etoh".into(), "h2o".into()])
            .factor("feed", vec![1.0.into(), 3.0.into()])
            .build()
            .unwrap();

        // 2 continuous + 1 categorical pads to 5 total factors, 14 trials.
        assert_eq!(table.shape(), (14, 3));
        assert_eq!(table.names(), &["temp", "solvent", "feed"]);

        // First trial is the border row: midpoint, high, high.
        assert_eq!(table.get(0, 0), &LevelValue::Number(50.0));
        assert_eq!(table.get(0, 1), &LevelValue::Label("h2o".into()));
        assert_eq!(table.get(0, 2), &LevelValue::Number(3.0));

        // First center row: midpoints, categorical resolved to the first
        // label by row parity.
        assert_eq!(table.get(12, 0), &LevelValue::Number(50.0));
        assert_eq!(table.get(12, 1), &LevelValue::Label("etoh".into()));
        assert_eq!(table.get(12, 2), &LevelValue::Number(2.0));
    }

    #[test]
    fn test_flag_levels_are_categorical() {
        let table = DsdBuilder::new()
            .factor("x1", vec![0.0.into(), 1.0.into()])
            .factor("x2", vec![0.0.into(), 1.0.into()])
            .factor("stirred", vec![false.into(), true.into()])
            .build()
            .unwrap();

        for value in table.column("stirred").unwrap() {
            assert!(matches!(value, LevelValue::Flag(_)));
        }
    }

    #[test]
    fn test_bad_factor_levels() {
        let err = DsdBuilder::new()
            .factor("x1", vec![0.0.into(), 1.0.into()])
            .factor("x2", vec![0.0.into(), 0.5.into(), 1.0.into()])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::BadFactorLevels {
                name: "x2".into(),
                count: 3
            }
        );
    }

    #[test]
    fn test_mixed_continuous_levels_rejected() {
        let err = DsdBuilder::new()
            .factor("x1", vec![0.0.into(), "high".into()])
            .factor("x2", vec![0.0.into(), 1.0.into()])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParams { .. }));
    }

    #[test]
    fn test_too_few_continuous() {
        let err = generate(1, 3, DesignChoice::Dsd).unwrap_err();
        assert!(matches!(err, Error::InvalidParams { .. }));

        let err = DsdBuilder::new()
            .factor("only", vec![0.0.into(), 1.0.into()])
            .factor("cat", vec!["a".into(), "b".into()])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParams { .. }));
    }

    #[test]
    fn test_counts_and_factors_conflict() {
        let err = DsdBuilder::new()
            .continuous(2)
            .factor("x1", vec![0.0.into(), 1.0.into()])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParams { .. }));
    }

    #[test]
    fn test_orth_padding_counts_extra_centers() {
        // orth with two categorical factors carries four center rows, so
        // 2 + 2 factors reach 13 trials with a single fake factor.
        let table = generate(2, 2, DesignChoice::Orth).unwrap();
        assert_eq!(table.shape(), (16, 4));
    }
}
