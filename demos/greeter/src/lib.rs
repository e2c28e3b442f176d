//! Greeter sample application.
//!
//! Asks for a name on standard input and prints a greeting, with the whole
//! interaction described as one `fp_primer` IO action that `main` runs once.

pub mod config;
pub mod program;
