//! LS8 command line runner
//!
//! Loads a program file, runs it to completion, and prints PRN output to
//! stdout. Diagnostics and logs go to stderr, so program output stays clean.
//!
//! # Usage
//! ```text
//! ls8 <program.ls8> [--trace]
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use ls8_vm::{Cpu, CpuConfig, OutputHandler};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run an LS8 machine code program")]
struct Cli {
    /// Path to the program file (one binary byte per line)
    program: PathBuf,

    /// Print machine state to stderr before every instruction
    #[arg(long)]
    trace: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let program = match ls8_loader::load_file(&cli.program) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(err.exit_code());
        }
    };

    tracing::debug!(
        "Loaded {} bytes from {}",
        program.len(),
        cli.program.display()
    );

    let config = CpuConfig { trace: cli.trace };
    let mut cpu = match Cpu::new(&program, config) {
        Ok(cpu) => cpu,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(err.exit_code());
        }
    };
    cpu.set_output(OutputHandler::with_sink(Box::new(std::io::stdout())));

    match cpu.run() {
        Ok(result) => {
            tracing::debug!("Halted after {} cycles", result.cycles);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(err.exit_code());
        }
    }
}
