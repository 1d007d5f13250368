//! # dsd
//!
//! A definitive screening design (DSD) library for experimental design
//! with continuous and two-level categorical factors.
//!
//! ## Overview
//!
//! Definitive screening designs (Jones & Nachtsheim, 2011/2013) are
//! three-level designs that screen many factors in few trials while
//! keeping main effects unaliased from two-factor interactions and
//! quadratic effects. This library provides:
//!
//! - The core construction pipeline: Paley/conference matrices, validated
//!   override tables for specific factor totals, foldover interleaving and
//!   categorical center-point correction
//! - Two categorical strategies: de-aliased interactions (`dsd`) or an
//!   orthogonal main-effects plan (`orth`)
//! - A builder that maps coded designs onto named factors with numeric
//!   ranges or category labels
//! - Verification of the foldover pairing and level balance
//!
//! ## Quick Start
//!
//! The easiest way to create a design table is with the builder:
//!
//! ```rust
//! use dsd::DsdBuilder;
//!
//! let table = DsdBuilder::new()
//!     .factor("temperature", vec![20.0.into(), 80.0.into()])
//!     .factor("ph", vec![5.0.into(), 9.0.into()])
//!     .factor("solvent", vec!["etoh".into(), "h2o".into()])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.names(), &["temperature", "ph", "solvent"]);
//! assert!(table.rows() >= 13);
//! ```
//!
//! Or compute the coded matrix directly:
//!
//! ```rust
//! use dsd::{compute_dsd, DesignChoice};
//!
//! let design = compute_dsd(6, 0, DesignChoice::Dsd).unwrap();
//!
//! assert_eq!(design.runs(), 13);
//! assert_eq!(design.factors(), 6);
//! assert!(design.verify().is_valid);
//! ```
//!
//! ## Structure
//!
//! A design with `m` continuous and `k` categorical factors has `m + k`
//! columns, continuous first. Continuous cells are coded −1/0/+1;
//! categorical cells carry the level codes 1/2. Every non-center even row
//! is immediately followed by its foldover mirror, and the all-midpoint
//! center trials sit at the end. Row order is part of the contract and is
//! never randomized.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of designs and tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod construct;
pub mod design;
pub mod error;
pub mod table;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{generate, DsdBuilder};
    pub use crate::construct::{compute_dsd, paley_matrix, DesignChoice, LegendreTable};
    pub use crate::design::{
        verify_foldover, BalanceReport, Design, DesignParams, VerificationResult,
    };
    pub use crate::error::{Error, Result};
    pub use crate::table::{DesignTable, LevelValue};
    pub use crate::utils::is_prime;
}

// Re-export commonly used items at crate root
pub use builder::{generate, DsdBuilder};
pub use construct::{compute_dsd, DesignChoice};
pub use design::{verify_foldover, Design, DesignParams};
pub use error::{Error, Result};
pub use table::{DesignTable, LevelValue};
pub use utils::is_prime;
