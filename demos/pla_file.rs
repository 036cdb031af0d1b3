//! Example demonstrating the PLA file workflow
//!
//! Writes a PLA description to a temporary file, reads it back as a cover,
//! minimizes it, and writes the result next to the input.

use std::io::Write;

use qm_logic::{Cover, Minimizable, PLAReader, PLAWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== PLA File Example ===\n");

    let dir = std::env::temp_dir();
    let input_path = dir.join("qm_example_input.pla");
    let output_path = dir.join("qm_example_output.pla");

    let pla = "\
# 3-input majority-ish cover
.i 3
.o 1
.p 4
011 |1
101 |1
110 |1
111 |1
.e
";
    let mut file = std::fs::File::create(&input_path)?;
    file.write_all(pla.as_bytes())?;

    let cover = Cover::from_pla_file(&input_path)?;
    println!(
        "Read {} terms over {} inputs from {}",
        cover.num_terms(),
        cover.num_inputs(),
        input_path.display()
    );

    let minimized = cover.minimize()?;
    minimized.to_pla_file(&output_path)?;

    println!("Minimized to {} terms:", minimized.num_terms());
    for term in minimized.terms() {
        println!("  {}", term);
    }
    println!("\nWrote result to {}", output_path.display());

    Ok(())
}
