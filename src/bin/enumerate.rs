//! Command-line proof enumerator

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use axiomatlas::{
    small_basis, AxiomAtlas, Formula, Result, SearchConfig, SearchSummary,
};

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  --max-length <n>    Maximum proof length to search (default: 5)");
    eprintln!("  --output <file>     Report file (default: proof_output.txt)");
    eprintln!("  --basis <formula>   Add a basis formula, replacing the default basis");
    eprintln!("                      (can be used multiple times)");
    eprintln!("  --small-basis       Use the reduced five-formula basis");
    eprintln!("  --json <file>       Also write a JSON summary");
    eprintln!("  --quiet             Suppress stdout progress");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = SearchConfig::default();
    let mut output = String::from("proof_output.txt");
    let mut json_path: Option<String> = None;
    let mut custom_basis: Vec<Formula> = Vec::new();
    let mut quiet = false;

    // Parse command line options
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-length" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        config.max_length = n;
                    }
                    i += 1;
                }
            }
            "--output" => {
                if i + 1 < args.len() {
                    output = args[i + 1].clone();
                    i += 1;
                }
            }
            "--basis" => {
                if i + 1 < args.len() {
                    custom_basis.push(Formula::new(args[i + 1].as_str()));
                    i += 1;
                }
            }
            "--small-basis" => {
                config.basis = small_basis();
            }
            "--json" => {
                if i + 1 < args.len() {
                    json_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
        i += 1;
    }
    if !custom_basis.is_empty() {
        config.basis = custom_basis;
    }

    if !quiet {
        println!(
            "Searching for proofs up to length {} over a {}-formula basis",
            config.max_length,
            config.basis.len()
        );
    }

    let started = Instant::now();
    let result = run(&config, &output, json_path.as_deref());
    let elapsed = started.elapsed();

    match result {
        Ok(summary) => {
            if !quiet {
                println!("Successfully wrote output to {}", output);
                println!(
                    "Found {} unique theorems among {} proofs",
                    summary.theorems.len(),
                    summary.total_proofs
                );
                println!("Total execution time: {:.4} seconds.", elapsed.as_secs_f64());
            }
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            eprintln!(
                "Total execution time before error: {:.4} seconds.",
                elapsed.as_secs_f64()
            );
            process::exit(1);
        }
    }
}

/// Everything that can fail, behind one boundary.
fn run(config: &SearchConfig, output: &str, json_path: Option<&str>) -> Result<SearchSummary> {
    let file = File::create(output)?;
    let mut sink = BufWriter::new(file);

    let atlas = AxiomAtlas::new(config.clone());
    let summary = atlas.run(&mut sink)?;
    sink.flush()?;

    if let Some(path) = json_path {
        let json = serde_json::to_string_pretty(&summary.to_json())?;
        fs::write(path, json)?;
    }
    Ok(summary)
}
