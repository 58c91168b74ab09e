//! Arithmetic logic unit

use ls8_isa::{AluOp, Flags};
use thiserror::Error;

/// ALU failure, mapped to a machine fault by the engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AluError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Result of one ALU operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutcome {
    /// Write-back value for the destination register
    Value(u8),
    /// New flags register (CMP)
    Flags(Flags),
}

/// Apply `op` to two register values
///
/// Pure: no state is touched, so a failing DIV/MOD leaves the destination
/// register as it was. Arithmetic wraps at 8 bits.
pub fn compute(op: AluOp, a: u8, b: u8) -> Result<AluOutcome, AluError> {
    let outcome = match op {
        AluOp::Add => AluOutcome::Value(a.wrapping_add(b)),
        AluOp::Sub => AluOutcome::Value(a.wrapping_sub(b)),
        AluOp::Mul => AluOutcome::Value(a.wrapping_mul(b)),
        AluOp::Div => {
            if b == 0 {
                return Err(AluError::DivisionByZero);
            }
            AluOutcome::Value(a / b)
        }
        AluOp::Mod => {
            if b == 0 {
                return Err(AluError::DivisionByZero);
            }
            AluOutcome::Value(a % b)
        }
        AluOp::And => AluOutcome::Value(a & b),
        AluOp::Xor => AluOutcome::Value(a ^ b),
        AluOp::Cmp => AluOutcome::Flags(Flags::from_ordering(a.cmp(&b))),
    };

    Ok(outcome)
}
