//! Example demonstrating the random instance generator
//!
//! Requires the `generator` feature:
//!
//! ```sh
//! cargo run --example generate_instance --features generator
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use qm_logic::{generator, Minimizable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Random Instance Example ===\n");

    let mut rng = StdRng::seed_from_u64(42);
    let cover = generator::generate_instance(4, 1, &mut rng);

    println!(
        "Generated {} minterms over {} inputs:",
        cover.num_terms(),
        cover.num_inputs()
    );
    let mut stdout = std::io::stdout();
    generator::write_instance(&cover, &mut stdout)?;
    println!();

    let minimized = cover.minimize()?;
    println!("Minimized to {} terms:", minimized.num_terms());
    for term in minimized.terms() {
        println!("  {}", term);
    }

    Ok(())
}
