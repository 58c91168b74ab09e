//! Program image container

use serde::{Deserialize, Serialize};

/// A loaded LS8 program: the flat byte image installed at address 0
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw instruction bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Image bytes in address order, starting at address 0
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Image length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
