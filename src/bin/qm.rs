//! Quine-McCluskey Logic Minimizer - Command Line Interface

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use qm_logic::{generator, qm, Cover, MinimizerConfig, PLAReader, PLAWriter, SelectionMode};

/// Widest instance the generator will enumerate
const MAX_GENERATE_INPUTS: usize = 24;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Run Quine-McCluskey minimization (default)
    Minimize,
    /// Echo the parsed terms without minimization
    Echo,
    /// Print statistics about the input
    Stats,
    /// Generate a random instance instead of reading one
    Generate,
}

#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(about = "Quine-McCluskey two-level logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file (required except for generate)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "minimize")]
    command: Command,

    /// Use canonical iterative essential selection instead of single-pass
    #[arg(long = "canonical")]
    canonical: bool,

    /// Cap on intermediate terms generated by the combination loop
    #[arg(long = "max-terms")]
    max_terms: Option<usize>,

    /// Provide execution summary on stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Suppress printing of solution
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Input count for generated instances
    #[arg(long = "inputs", default_value_t = 7)]
    inputs: usize,

    /// Output count for generated instances
    #[arg(long = "outputs", default_value_t = 1)]
    outputs: usize,

    /// RNG seed for generated instances (random when omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    if let Command::Generate = args.command {
        generate(&args);
        return;
    }

    let Some(ref input) = args.input else {
        eprintln!("Error: an input PLA file is required");
        process::exit(1);
    };
    let cover = match Cover::from_pla_file(input) {
        Ok(cover) => cover,
        Err(e) => {
            eprintln!("Error reading PLA file '{}': {}", input.display(), e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!(
            "Input: {} inputs, {} outputs, {} terms ({} distinct)",
            cover.num_inputs(),
            cover.num_outputs(),
            cover.num_terms(),
            cover.term_set().len()
        );
    }

    let result = match args.command {
        Command::Minimize => minimize(&args, &cover),
        Command::Echo => cover,
        Command::Stats => {
            println!("PLA statistics:");
            println!("  Inputs:         {}", cover.num_inputs());
            println!("  Outputs:        {}", cover.num_outputs());
            println!("  Terms:          {}", cover.num_terms());
            println!("  Distinct terms: {}", cover.term_set().len());
            process::exit(0);
        }
        Command::Generate => unreachable!("handled above"),
    };

    if !args.no_output {
        write_cover(&args, &result);
    }
}

fn minimize(args: &Args, cover: &Cover) -> Cover {
    let mut config = MinimizerConfig::default();
    if args.canonical {
        config.selection = SelectionMode::Iterative;
    }
    if args.max_terms.is_some() {
        config.max_terms = args.max_terms;
    }

    let run = match qm::minimize(&cover.term_set(), &config) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Minimization failed: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!(
            "Minimized: {} prime implicants, {} essential, {} minterms residual",
            run.prime_implicants.len(),
            run.essential_implicants.len(),
            run.residual.len()
        );
    }

    let mut result = Cover::new(cover.num_inputs(), cover.num_outputs());
    for implicant in run.essential_implicants {
        if let Err(e) = result.add_term(implicant) {
            eprintln!("Internal error assembling result cover: {}", e);
            process::exit(1);
        }
    }
    result
}

fn generate(args: &Args) {
    if args.inputs == 0 || args.inputs > MAX_GENERATE_INPUTS {
        eprintln!(
            "Error: --inputs must be between 1 and {}",
            MAX_GENERATE_INPUTS
        );
        process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cover = generator::generate_instance(args.inputs, args.outputs, &mut rng);

    if args.summary {
        eprintln!(
            "Generated: {} inputs, {} outputs, {} minterms",
            cover.num_inputs(),
            cover.num_outputs(),
            cover.num_terms()
        );
    }

    let outcome = match args.output_file {
        Some(ref path) => std::fs::File::create(path)
            .map_err(Into::into)
            .and_then(|mut file| generator::write_instance(&cover, &mut file)),
        None => generator::write_instance(&cover, &mut io::stdout().lock()),
    };
    if let Err(e) = outcome {
        eprintln!("Error writing instance: {}", e);
        process::exit(1);
    }
}

fn write_cover(args: &Args, cover: &Cover) {
    if let Some(ref path) = args.output_file {
        if let Err(e) = cover.to_pla_file(path) {
            eprintln!("Error writing output file '{}': {}", path.display(), e);
            process::exit(1);
        }
        if args.summary {
            eprintln!("Wrote output to: {}", path.display());
        }
    } else if let Err(e) = cover.write_pla(&mut io::stdout().lock()) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }
}
