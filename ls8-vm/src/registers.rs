//! The 8-register file

use ls8_isa::{Register, NUM_REGISTERS, STACK_INIT};

/// General-purpose registers R0-R7
///
/// Indexed by [`Register`], so access is infallible; raw operand bytes are
/// validated at decode time.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    values: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Fresh register file: all zero except SP at its reset value
    pub fn new() -> Self {
        let mut values = [0; NUM_REGISTERS];
        values[Register::SP.index()] = STACK_INIT;
        Self { values }
    }

    #[inline]
    pub fn get(&self, reg: Register) -> u8 {
        self.values[reg.index()]
    }

    #[inline]
    pub fn set(&mut self, reg: Register, value: u8) {
        self.values[reg.index()] = value;
    }

    /// Stack pointer (R7)
    #[inline]
    pub fn sp(&self) -> u8 {
        self.get(Register::SP)
    }

    #[inline]
    pub fn set_sp(&mut self, value: u8) {
        self.set(Register::SP, value);
    }

    /// All eight values in index order
    pub fn values(&self) -> &[u8; NUM_REGISTERS] {
        &self.values
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
