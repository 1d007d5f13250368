//! Basic usage example for the dsd library.
//!
//! This example demonstrates how to compute coded screening designs and
//! how to build named-factor design tables.

use dsd::{compute_dsd, DesignChoice, DsdBuilder};

fn main() {
    println!("dsd Library - Basic Usage Example\n");

    // Compute a coded design: 6 continuous factors, no categoricals
    println!("Computing a 6-factor screening design...");
    let design = compute_dsd(6, 0, DesignChoice::Dsd).expect("Failed to compute design");

    println!("Design:");
    println!("  Runs: {}", design.runs());
    println!("  Factors: {}", design.factors());
    println!("  Center rows: {}", design.center_rows());
    println!();

    println!("Coded matrix:");
    println!("{design}");

    // Verify the foldover structure
    println!("Verifying foldover pairing...");
    let result = design.verify();
    if result.is_valid {
        println!("✓ Every trial is adjacent to its foldover mirror");
    } else {
        println!("✗ Design failed verification");
        for issue in &result.issues {
            println!("  Issue: {issue:?}");
        }
    }
    println!();

    // Level balance
    let report = design.balance_report();
    if report.is_balanced() {
        println!("✓ All factors are level-balanced");
    }
    println!();

    // Mixed continuous/categorical design with two categorical factors
    println!("Computing a 3+2 design with categorical factors...");
    let design = compute_dsd(3, 2, DesignChoice::Dsd).expect("Failed to compute design");
    println!("  Runs: {} (two corrected center trials)", design.runs());
    println!("{design}");

    // Named factors with real settings
    println!("Building a named design table...");
    let table = DsdBuilder::new()
        .factor("temperature", vec![20.0.into(), 80.0.into()])
        .factor("ph", vec![5.0.into(), 9.0.into()])
        .factor("solvent", vec!["etoh".into(), "h2o".into()])
        .build()
        .expect("Failed to build table");

    println!(
        "  {} trials across {} factors (padded to 13+ trials):",
        table.rows(),
        table.names().len()
    );
    println!("{table}");
}
