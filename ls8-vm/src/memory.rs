//! Flat 256-byte memory

use crate::error::{Result, VmError};
use ls8_isa::MEMORY_SIZE;

/// RAM: 256 bytes, zero-initialized
///
/// Addresses are `u16` so one-past-the-end values stay representable and
/// fail the bounds check instead of wrapping.
#[derive(Clone, Debug)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Read the byte at `address`
    #[inline]
    pub fn read(&self, address: u16) -> Result<u8> {
        self.cells
            .get(address as usize)
            .copied()
            .ok_or(VmError::OutOfBounds { address })
    }

    /// Write a byte at `address`
    #[inline]
    pub fn write(&mut self, address: u16, value: u8) -> Result<()> {
        match self.cells.get_mut(address as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(VmError::OutOfBounds { address }),
        }
    }

    /// Install an image starting at address 0
    ///
    /// An image longer than RAM fails at the first address past the end.
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        for (address, &byte) in image.iter().enumerate() {
            self.write(address as u16, byte)?;
        }
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
