//! Random PLA instance generation
//!
//! A standalone helper (feature `generator`) that produces randomized
//! single-function truth tables for exercising the minimizer: benchmarks,
//! integration tests and the CLI `generate` command all draw inputs from
//! here. Taking the RNG as a parameter keeps generated instances
//! reproducible under a fixed seed.

use std::io::Write;

use rand::Rng;

use crate::cover::{Cover, Term};
use crate::pla::PLAWriteError;

/// Generate a random minimization instance
///
/// Draws a minterm count uniformly from `[(2^n - 1) / 2, 2^n - 1]` where
/// `n` is `num_inputs`, samples that many distinct minterms from the full
/// input space and returns them as a cover, sorted ascending.
///
/// # Panics
///
/// Panics if `num_inputs` is zero or too wide to enumerate (the instance
/// space must fit in `usize`). Callers are expected to bound the width;
/// the CLI caps it well below that.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use qm_logic::generator::generate_instance;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let cover = generate_instance(4, 1, &mut rng);
/// assert_eq!(cover.num_inputs(), 4);
/// assert!(cover.num_terms() >= 7 && cover.num_terms() <= 15);
/// ```
pub fn generate_instance<R: Rng + ?Sized>(
    num_inputs: usize,
    num_outputs: usize,
    rng: &mut R,
) -> Cover {
    assert!(
        num_inputs > 0 && num_inputs < usize::BITS as usize,
        "instance width out of range: {}",
        num_inputs
    );
    let space = 1usize << num_inputs;
    let lower = (space - 1) / 2;
    let upper = space - 1;
    let count = rng.gen_range(lower..=upper);

    let mut values = rand::seq::index::sample(rng, space, count).into_vec();
    values.sort_unstable();

    let terms: Vec<Term> = values
        .into_iter()
        .map(|value| Term::from_index(value as u64, num_inputs))
        .collect();
    Cover::from_parts(num_inputs, num_outputs, terms)
}

/// Serialize a generated instance as minimizer input
///
/// Unlike the minimizer's own writer, which emits bare implicant patterns,
/// instance rows carry the `|`-separated all-ones output field the reader
/// expects of term lines: `0101 |1`.
///
/// # Errors
///
/// Returns [`PLAWriteError`] on IO failure.
pub fn write_instance<W: Write>(cover: &Cover, writer: &mut W) -> Result<(), PLAWriteError> {
    writeln!(writer, ".i {}", cover.num_inputs())?;
    writeln!(writer, ".o {}", cover.num_outputs())?;
    writeln!(writer, ".p {}", cover.num_terms())?;
    let outputs = "1".repeat(cover.num_outputs());
    for term in cover.terms() {
        writeln!(writer, "{} |{}", term, outputs)?;
    }
    writeln!(writer, ".e")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pla::PLAReader;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_instance_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16 {
            let cover = generate_instance(5, 1, &mut rng);
            assert_eq!(cover.num_inputs(), 5);
            assert!(cover.num_terms() >= 15);
            assert!(cover.num_terms() <= 31);
        }
    }

    #[test]
    fn test_generate_instance_minterms_distinct_and_sorted() {
        let mut rng = StdRng::seed_from_u64(2);
        let cover = generate_instance(6, 1, &mut rng);
        assert_eq!(cover.term_set().len(), cover.num_terms());
        let mut sorted = cover.terms().to_vec();
        sorted.sort();
        assert_eq!(sorted, cover.terms());
        assert!(cover.terms().iter().all(Term::is_minterm));
    }

    #[test]
    fn test_generate_instance_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = generate_instance(5, 1, &mut a);
        let second = generate_instance(5, 1, &mut b);
        assert_eq!(first.terms(), second.terms());
    }

    #[test]
    fn test_write_instance_roundtrips_through_reader() {
        let mut rng = StdRng::seed_from_u64(3);
        let cover = generate_instance(4, 1, &mut rng);

        let mut buffer = Vec::new();
        write_instance(&cover, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(".i 4\n.o 1\n"));
        assert!(text.ends_with(".e\n"));

        let reread = Cover::from_pla_string(&text).unwrap();
        assert_eq!(reread.terms(), cover.terms());
    }
}
