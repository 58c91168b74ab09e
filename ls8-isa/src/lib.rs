//! # LS8 Architecture Definitions
//!
//! Shared definitions for the LS8 8-bit machine:
//! - 256 bytes of RAM, addresses 0x00-0xFF
//! - 8 general-purpose 8-bit registers, R7 doubling as the stack pointer
//! - one-byte opcodes followed by 0-2 operand bytes
//! - flags register `00000LGE` written by CMP
//!
//! The execution engine lives in `ls8-vm`; this crate only describes the
//! machine and decodes raw bytes into [`Instruction`] values.

pub mod error;
pub mod flags;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use error::IsaError;
pub use flags::Flags;
pub use instruction::{AluOp, Instruction};
pub use opcode::Opcode;
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};

/// Addressable memory size in bytes
pub const MEMORY_SIZE: usize = 256;

/// Stack pointer (R7) value at reset; the stack grows downward from here
pub const STACK_INIT: u8 = 0xF4;
