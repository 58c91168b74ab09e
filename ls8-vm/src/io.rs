//! Output handling

use crate::error::Result;
use std::io::Write;

/// Collects PRN output
///
/// Every printed value is recorded in order; when a sink is attached it
/// also receives the value immediately, as a decimal line. The CLI
/// attaches stdout, tests read the record back.
pub struct OutputHandler {
    printed: Vec<u8>,
    sink: Option<Box<dyn Write>>,
}

impl OutputHandler {
    pub fn new() -> Self {
        OutputHandler {
            printed: Vec::new(),
            sink: None,
        }
    }

    /// Output handler that writes through to `sink`
    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        OutputHandler {
            printed: Vec::new(),
            sink: Some(sink),
        }
    }

    /// Print one value: decimal, one per line
    pub fn print(&mut self, value: u8) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", value)?;
        }
        self.printed.push(value);
        Ok(())
    }

    /// Values printed so far, in order
    pub fn printed(&self) -> &[u8] {
        &self.printed
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
