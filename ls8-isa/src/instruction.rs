//! # LS8 Instruction Decoding
//!
//! [`Instruction`] is the decoded form of a three-byte fetch window:
//! the opcode byte plus the two bytes after it. [`Instruction::decode`]
//! validates only the operand bytes the opcode consumes; trailing bytes of
//! shorter instructions are ignored.

use crate::error::IsaError;
use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// ALU operation selector
///
/// Closed set: every selector here has an implementation, and the only way
/// to obtain one from an opcode is the fallible conversion below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Xor,
    Cmp,
}

impl TryFrom<Opcode> for AluOp {
    type Error = IsaError;

    fn try_from(opcode: Opcode) -> Result<Self, IsaError> {
        match opcode {
            Opcode::Add => Ok(AluOp::Add),
            Opcode::Sub => Ok(AluOp::Sub),
            Opcode::Mul => Ok(AluOp::Mul),
            Opcode::Div => Ok(AluOp::Div),
            Opcode::Mod => Ok(AluOp::Mod),
            Opcode::And => Ok(AluOp::And),
            Opcode::Xor => Ok(AluOp::Xor),
            Opcode::Cmp => Ok(AluOp::Cmp),
            _ => Err(IsaError::UnsupportedAluOp(opcode)),
        }
    }
}

/// A decoded LS8 instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Control ==========
    /// HLT: stop execution
    Hlt,
    /// RET: PC = pop()
    Ret,

    // ========== Data ==========
    /// LDI: reg = value
    Ldi { reg: Register, value: u8 },
    /// PRN: print reg in decimal
    Prn { reg: Register },

    // ========== ALU ==========
    /// ALU operation: write-back into `a`, or FL for CMP
    Alu { op: AluOp, a: Register, b: Register },

    // ========== Stack ==========
    /// PUSH: push(reg)
    Push { reg: Register },
    /// POP: reg = pop()
    Pop { reg: Register },

    // ========== Subroutines and jumps ==========
    /// CALL: push(PC + 2); PC = reg
    Call { reg: Register },
    /// JMP: PC = reg
    Jmp { reg: Register },
    /// JEQ: if E: PC = reg
    Jeq { reg: Register },
    /// JNE: if !E: PC = reg
    Jne { reg: Register },
    /// JGT: if G: PC = reg
    Jgt { reg: Register },
    /// JLT: if L: PC = reg
    Jlt { reg: Register },
    /// JGE: if G or E: PC = reg
    Jge { reg: Register },
}

impl Instruction {
    /// Decode a fetch window
    pub fn decode(opcode: u8, a: u8, b: u8) -> Result<Self, IsaError> {
        let opcode = Opcode::from_u8(opcode).ok_or(IsaError::UnknownOpcode(opcode))?;

        let instruction = match opcode {
            Opcode::Hlt => Instruction::Hlt,
            Opcode::Ret => Instruction::Ret,

            Opcode::Ldi => Instruction::Ldi {
                reg: register(a)?,
                value: b,
            },
            Opcode::Prn => Instruction::Prn { reg: register(a)? },

            Opcode::Push => Instruction::Push { reg: register(a)? },
            Opcode::Pop => Instruction::Pop { reg: register(a)? },

            Opcode::Call => Instruction::Call { reg: register(a)? },
            Opcode::Jmp => Instruction::Jmp { reg: register(a)? },
            Opcode::Jeq => Instruction::Jeq { reg: register(a)? },
            Opcode::Jne => Instruction::Jne { reg: register(a)? },
            Opcode::Jgt => Instruction::Jgt { reg: register(a)? },
            Opcode::Jlt => Instruction::Jlt { reg: register(a)? },
            Opcode::Jge => Instruction::Jge { reg: register(a)? },

            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Cmp
            | Opcode::And
            | Opcode::Xor => Instruction::Alu {
                op: AluOp::try_from(opcode)?,
                a: register(a)?,
                b: register(b)?,
            },
        };

        Ok(instruction)
    }
}

fn register(operand: u8) -> Result<Register, IsaError> {
    Register::from_index(operand).ok_or(IsaError::InvalidRegister(operand))
}
