//! # LS8 Opcode Definitions
//!
//! This module defines the opcode byte for every LS8 instruction.
//!
//! ## Opcode Encoding
//!
//! Each opcode byte is laid out `AABCDDDD`:
//! - `AA` - number of operand bytes (0-2)
//! - `B` - 1 when the operation is handled by the ALU
//! - `C` - 1 when the instruction writes PC itself
//! - `DDDD` - instruction identifier
//!
//! Decoding goes through the table below; the `AA`/`B`/`C` bits are a
//! structural property of the values and are pinned by tests.

use serde::{Deserialize, Serialize};

/// Instruction opcode (one byte, encoded `AABCDDDD`)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== Control (0x01-0x11) ==========
    /// HLT: stop execution
    Hlt = 0x01,
    /// RET: PC = pop()
    Ret = 0x11,

    // ========== Stack and output (0x45-0x47) ==========
    /// PUSH: push(reg[a])
    Push = 0x45,
    /// POP: reg[a] = pop()
    Pop = 0x46,
    /// PRN: print reg[a] in decimal
    Prn = 0x47,

    // ========== Subroutines and jumps (0x50-0x5A) ==========
    /// CALL: push(PC + 2); PC = reg[a]
    Call = 0x50,
    /// JMP: PC = reg[a]
    Jmp = 0x54,
    /// JEQ: if E: PC = reg[a]
    Jeq = 0x55,
    /// JNE: if !E: PC = reg[a]
    Jne = 0x56,
    /// JGT: if G: PC = reg[a]
    Jgt = 0x57,
    /// JLT: if L: PC = reg[a]
    Jlt = 0x58,
    /// JGE: if G or E: PC = reg[a]
    Jge = 0x5A,

    // ========== Immediate (0x82) ==========
    /// LDI: reg[a] = immediate
    Ldi = 0x82,

    // ========== ALU (0xA0-0xAB) ==========
    /// ADD: reg[a] += reg[b]
    Add = 0xA0,
    /// SUB: reg[a] -= reg[b]
    Sub = 0xA1,
    /// MUL: reg[a] *= reg[b]
    Mul = 0xA2,
    /// DIV: reg[a] /= reg[b]
    Div = 0xA3,
    /// MOD: reg[a] %= reg[b]
    Mod = 0xA4,
    /// CMP: FL = compare(reg[a], reg[b])
    Cmp = 0xA7,
    /// AND: reg[a] &= reg[b]
    And = 0xA8,
    /// XOR: reg[a] ^= reg[b]
    Xor = 0xAB,
}

impl Opcode {
    /// Every defined opcode
    pub const ALL: [Self; 21] = [
        Opcode::Hlt,
        Opcode::Ret,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Prn,
        Opcode::Call,
        Opcode::Jmp,
        Opcode::Jeq,
        Opcode::Jne,
        Opcode::Jgt,
        Opcode::Jlt,
        Opcode::Jge,
        Opcode::Ldi,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Mod,
        Opcode::Cmp,
        Opcode::And,
        Opcode::Xor,
    ];

    /// Try to convert from u8
    ///
    /// 0x00 is deliberately not an opcode: executing zeroed memory is an
    /// unknown-instruction fault, not a no-op.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            // Control
            0x01 => Some(Opcode::Hlt),
            0x11 => Some(Opcode::Ret),

            // Stack and output
            0x45 => Some(Opcode::Push),
            0x46 => Some(Opcode::Pop),
            0x47 => Some(Opcode::Prn),

            // Subroutines and jumps
            0x50 => Some(Opcode::Call),
            0x54 => Some(Opcode::Jmp),
            0x55 => Some(Opcode::Jeq),
            0x56 => Some(Opcode::Jne),
            0x57 => Some(Opcode::Jgt),
            0x58 => Some(Opcode::Jlt),
            0x5A => Some(Opcode::Jge),

            // Immediate
            0x82 => Some(Opcode::Ldi),

            // ALU
            0xA0 => Some(Opcode::Add),
            0xA1 => Some(Opcode::Sub),
            0xA2 => Some(Opcode::Mul),
            0xA3 => Some(Opcode::Div),
            0xA4 => Some(Opcode::Mod),
            0xA7 => Some(Opcode::Cmp),
            0xA8 => Some(Opcode::And),
            0xAB => Some(Opcode::Xor),

            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode (the `AA` bits)
    #[inline]
    pub const fn operand_count(self) -> u8 {
        (self as u8) >> 6
    }

    /// Check if the ALU handles this operation (the `B` bit)
    #[inline]
    pub const fn is_alu(self) -> bool {
        (self as u8) & 0b0010_0000 != 0
    }

    /// Check if the instruction writes PC itself (the `C` bit)
    #[inline]
    pub const fn sets_pc(self) -> bool {
        (self as u8) & 0b0001_0000 != 0
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Call => "CALL",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Jgt => "JGT",
            Opcode::Jlt => "JLT",
            Opcode::Jge => "JGE",
            Opcode::Ldi => "LDI",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Xor => "XOR",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
