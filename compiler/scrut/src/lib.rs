//! Scrut - demo driver for the clause dispatcher.
//!
//! Each demo builds one or more dispatchers and prints what they select for
//! a handful of subjects. `main.rs` only parses arguments and reports errors.

mod cli;
mod demos;
mod logging;

pub use cli::{parse_args, CliError, Command};
pub use demos::{Demo, DemoError};
pub use logging::init_tracing;
