//! Quine-McCluskey minimizer - command line interface
//!
//! Prints every stage of the pipeline in order: the truth table, the
//! minterms in binary and decimal, the prime and essential implicants, and
//! each minimal expression.

use clap::Parser;
use itertools::Itertools;
use log::LevelFilter;
use quine_logic::BoolFunction;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "quine")]
#[command(about = "Exact boolean function minimizer (Quine-McCluskey with Petrick's method)", long_about = None)]
#[command(version)]
struct Args {
    /// Number of variables in the expression (2, 3, or 4)
    #[arg(short = 'n', long = "vars")]
    num_vars: usize,

    /// Boolean expression, e.g. "ab(c'+d) + (a'd + c)'"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Suppress the truth table listing
    #[arg(long = "no-table")]
    no_table: bool,

    /// Log the merge and covering rounds to stderr
    #[arg(short, long)]
    verbose: bool,
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

    let function = match BoolFunction::new(args.num_vars, &args.expression) {
        Ok(function) => function,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let table = match function.truth_table() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Variables: {}",
        function.variables().iter().join(", ")
    );

    if !args.no_table {
        println!("\nTruth table:");
        print!("{}", table);
    }

    let minterms = table.minterms();
    println!(
        "\nBinary minterms: [{}]",
        minterms.iter().map(ToString::to_string).join(", ")
    );
    println!(
        "Decimal minterms: [{}]",
        minterms.iter().map(|m| m.decimal()).join(", ")
    );

    let result = quine_logic::minimize(&table);
    println!(
        "Prime implicants: [{}]",
        result.prime_implicants().iter().join(", ")
    );
    println!(
        "Essential prime implicants: [{}]",
        result.essential_implicants().iter().join(", ")
    );

    println!();
    for expression in result.expressions() {
        println!("Minimal expression: {}", expression);
    }
}
