//! Decode error types

use crate::opcode::Opcode;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IsaError {
    #[error("Unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),

    #[error("Invalid register index: {0} (valid range: 0-7)")]
    InvalidRegister(u8),

    #[error("Unsupported ALU operation: {0}")]
    UnsupportedAluOp(Opcode),
}
