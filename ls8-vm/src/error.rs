//! Runtime error types

use ls8_isa::Opcode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VmError {
    #[error("Unknown instruction {opcode:#04x} at address {pc:#04x}")]
    UnknownInstruction { opcode: u8, pc: u16 },

    #[error("Memory access out of bounds: address {address:#06x}")]
    OutOfBounds { address: u16 },

    #[error("Invalid register index {index} at address {pc:#04x} (valid range: 0-7)")]
    InvalidRegister { index: u8, pc: u16 },

    #[error("Division by zero at address {pc:#04x}")]
    DivisionByZero { pc: u16 },

    #[error("Unsupported ALU operation {opcode} at address {pc:#04x}")]
    UnsupportedOperation { opcode: Opcode, pc: u16 },

    #[error("Stack overflow at address {pc:#04x}")]
    StackOverflow { pc: u16 },

    #[error("Stack underflow at address {pc:#04x}")]
    StackUnderflow { pc: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VmError>;

impl VmError {
    /// Process exit status for this failure
    ///
    /// Each kind has its own stable status so scripts can tell faults
    /// apart without parsing stderr.
    pub fn exit_code(&self) -> i32 {
        match self {
            VmError::UnknownInstruction { .. } => 70,
            VmError::OutOfBounds { .. } | VmError::InvalidRegister { .. } => 71,
            VmError::DivisionByZero { .. } => 72,
            VmError::UnsupportedOperation { .. } => 73,
            VmError::StackOverflow { .. } => 74,
            VmError::StackUnderflow { .. } => 75,
            VmError::Io(_) => 76,
        }
    }
}
