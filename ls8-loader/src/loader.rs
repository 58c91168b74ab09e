//! Main loader logic

use std::fs;
use std::io;
use std::path::Path;

use ls8_isa::Program;

use crate::error::{LoaderError, Result};

/// Parse program source into a memory image
///
/// One machine code byte per line, written as exactly eight binary digits.
/// Everything after a `#` is a comment; blank lines are skipped. Reported
/// line numbers are 1-based and count comment and blank lines.
pub fn parse(source: &str) -> Result<Program> {
    let mut bytes = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        // Strip comments
        let code = match line.split_once('#') {
            Some((before, _)) => before,
            None => line,
        };

        let token = code.trim();
        if token.is_empty() {
            continue;
        }

        bytes.push(parse_literal(token, line_num + 1)?);
    }

    tracing::debug!("Parsed {} bytes of machine code", bytes.len());

    Ok(Program::new(bytes))
}

/// Parse one byte literal: exactly eight binary digits
fn parse_literal(token: &str, line: usize) -> Result<u8> {
    let invalid = || LoaderError::InvalidLiteral {
        line,
        token: token.to_string(),
    };

    // from_str_radix on its own would also accept a leading sign
    if token.len() != 8 || !token.bytes().all(|b| matches!(b, b'0' | b'1')) {
        return Err(invalid());
    }

    u8::from_str_radix(token, 2).map_err(|_| invalid())
}

/// Read and parse a program file
pub fn load_file(path: &Path) -> Result<Program> {
    let source = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoaderError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::Io(err),
    })?;

    parse(&source)
}
