//! # LS8 Virtual Machine
//!
//! Execute LS8 machine code images.
//!
//! The LS8 is an 8-bit CPU with 256 bytes of RAM, eight general-purpose
//! registers, and a downward-growing stack. Code, data, and the stack all
//! share the one address space.
//!
//! ## Features
//!
//! - **21 instructions**: arithmetic, stack, subroutines, conditional jumps
//! - **8 registers**: R0-R7, with R7 serving as the stack pointer
//! - **Comparison flags**: CMP sets L/G/E for the conditional jumps
//! - **Step execution**: drive the CPU one instruction at a time
//!
//! ## Example
//!
//! ```rust,no_run
//! use ls8_vm::{Cpu, CpuConfig};
//! use ls8_isa::Program;
//!
//! let program = Program::new(vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]);
//! let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
//! let result = cpu.run().unwrap();
//! println!("Cycles: {}", result.cycles);
//! ```

pub mod error;
pub mod registers;
pub mod memory;
pub mod alu;
pub mod io;
pub mod cpu;

pub use alu::{AluError, AluOutcome};
pub use cpu::{Cpu, CpuConfig, ExecutionResult};
pub use error::VmError;
pub use io::OutputHandler;
pub use memory::Memory;
pub use registers::RegisterFile;

/// Simple execution helper
///
/// Runs a program to completion and returns the values it printed.
pub fn run(program: &ls8_isa::Program) -> Result<Vec<u8>, VmError> {
    let mut cpu = Cpu::new(program, CpuConfig::default())?;
    Ok(cpu.run()?.outputs)
}
