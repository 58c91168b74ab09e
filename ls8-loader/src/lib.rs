//! LS8 Program Loader
//!
//! Parse LS8 program files into executable memory images.
//!
//! Program files carry one machine code byte per line, written as exactly
//! eight binary digits. Everything after a `#` is a comment.
//!
//! ## Example
//!
//! ```rust
//! use ls8_loader::parse;
//!
//! let source = r#"
//!     10000010 # LDI R0,8
//!     00000000
//!     00001000
//!     00000001 # HLT
//! "#;
//!
//! let program = parse(source).unwrap();
//! ```

pub mod error;
pub mod loader;

pub use error::{LoaderError, Result};
pub use loader::{load_file, parse};
