//! Example demonstrating in-memory minimization
//!
//! Builds a small cover by hand, runs Quine-McCluskey on it, and prints
//! the intermediate results alongside the minimized cover.

use qm_logic::{Cover, Minimizable, MinimizerConfig, PLAWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Quine-McCluskey Minimization Example ===\n");

    // f(a,b) covering minterms 00, 01 and 11
    let mut cover = Cover::new(2, 1);
    cover.add_term("00".parse()?)?;
    cover.add_term("01".parse()?)?;
    cover.add_term("11".parse()?)?;

    println!("Input cover:");
    for term in cover.terms() {
        println!("  {}", term);
    }
    println!();

    // The low-level entry point exposes primes and the unresolved chart
    let run = qm_logic::qm::minimize(&cover.term_set(), &MinimizerConfig::default())?;

    println!("Prime implicants:");
    for prime in &run.prime_implicants {
        println!("  {}", prime);
    }
    println!();

    println!("Essential prime implicants:");
    for essential in &run.essential_implicants {
        println!("  {}", essential);
    }
    println!();

    if !run.residual.is_empty() {
        println!("Minterms left to the residual chart:");
        for (minterm, primes) in run.residual.entries() {
            let options: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
            println!("  {} coverable by {}", minterm, options.join(", "));
        }
        println!();
    }

    // The high-level trait goes straight from cover to cover
    let minimized = cover.minimize()?;
    println!("Minimized cover as PLA:");
    print!("{}", minimized.to_pla_string()?);

    Ok(())
}
