//! unitr-cli - Command-line unit calculator
//!
//! Usage:
//!   unitr-cli "36 km/h to m/s"        # Single expression
//!   echo "1 N to si" | unitr-cli      # Pipe mode
//!   unitr-cli -f quantities.txt       # File mode
//!   unitr-cli -i                      # Interactive REPL
//!   unitr-cli --server                # JSON-RPC over stdin/stdout

mod calc;
mod server;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use unitr_core::Numeric;

use calc::Calculator;

#[derive(Parser, Debug)]
#[command(name = "unitr-cli")]
#[command(about = "Dimensionally-checked unit arithmetic and conversion", long_about = None)]
struct Args {
    /// Expression to evaluate
    expression: Option<String>,

    /// Read expressions from file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Interactive REPL mode
    #[arg(short, long)]
    interactive: bool,

    /// Show only the result (no input echo)
    #[arg(short, long)]
    quiet: bool,

    /// Compute with exact decimals instead of floats
    #[arg(long)]
    decimal: bool,

    /// Significant digits in printed values
    #[arg(short, long, default_value_t = 14)]
    precision: usize,

    /// Run as a JSON-RPC 2.0 server on stdin/stdout
    #[arg(long)]
    server: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if args.decimal {
        run(Calculator::<Decimal>::new(Some(args.precision)), &args)
    } else {
        run(Calculator::<f64>::new(Some(args.precision)), &args)
    }
}

fn run<N>(calc: Calculator<N>, args: &Args) -> Result<()>
where
    N: Numeric + Serialize + DeserializeOwned,
{
    if args.server {
        server::run_server(&calc)?;
    } else if let Some(expr) = &args.expression {
        // Single expression mode
        if !eval_and_print(&calc, expr, args.quiet) {
            std::process::exit(1);
        }
    } else if let Some(path) = &args.file {
        // File mode
        let content = std::fs::read_to_string(path)?;
        for line in content.lines() {
            eval_and_print(&calc, line, args.quiet);
        }
    } else if args.interactive {
        // Interactive REPL
        run_repl(&calc, args.quiet)?;
    } else if !io::stdin().is_terminal() {
        // Pipe mode (stdin is not a tty)
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            eval_and_print(&calc, &line, args.quiet);
        }
    } else {
        // No input, show help
        eprintln!("Usage: unitr-cli <expression>");
        eprintln!("       unitr-cli -f <file>");
        eprintln!("       unitr-cli -i");
        eprintln!("       unitr-cli --server");
        eprintln!("       echo \"1 N to si\" | unitr-cli");
        std::process::exit(1);
    }

    Ok(())
}

/// Print one line's result; returns false when evaluation failed
fn eval_and_print<N: Numeric>(calc: &Calculator<N>, input: &str, quiet: bool) -> bool {
    let (result, ok) = match calc.eval(input) {
        Ok(outcome) => (calc.render(&outcome), true),
        Err(err) => (format!("error: {err}"), false),
    };

    if quiet {
        if !result.is_empty() {
            println!("{}", result);
        }
    } else if result.is_empty() {
        println!("{}", input);
    } else {
        // Pad input to align results
        let padding = 40usize.saturating_sub(input.len());
        println!("{}{:>width$} = {}", input, "", result, width = padding);
    }
    ok
}

fn run_repl<N: Numeric>(calc: &Calculator<N>, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("unitr - Unit Calculator");
    println!("Type quantities to evaluate. Press Ctrl+D to exit.\n");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Special commands
        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        if let Some(name) = line.strip_prefix('?') {
            let name = name.trim();
            let known = if calc.units().exists(name) { "known" } else { "unknown" };
            println!("{name}: {known} unit");
            continue;
        }

        eval_and_print(calc, line, quiet);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"
Commands:
  help     Show this help
  ?NAME    Check whether a unit name resolves
  quit     Exit the REPL

Examples:
  5 kg m / s^2         Compound unit
  1 m + 100 cm         Sum in the left operand's units
  36 km/h to m/s       Unit conversion
  100 degC to degF     Temperature conversion
  1 N to si            Base SI units (also: cgs, us)
  1.5 h to h, min      Split across units
"#
    );
}
