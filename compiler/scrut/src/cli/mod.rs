//! Command-line parsing.
//!
//! `scrut [--list] [demo...]`. No demo names means every demo.

use crate::Demo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the demo names.
    List,
    /// Run these demos in order.
    Run(Vec<Demo>),
    /// Print usage.
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("unknown demo `{0}` (try `scrut --list`)")]
    UnknownDemo(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, CliError> {
    let mut demos = Vec::new();
    for arg in args {
        match arg.as_ref() {
            "--list" | "-l" => return Ok(Command::List),
            "--help" | "-h" => return Ok(Command::Help),
            option if option.starts_with('-') => {
                return Err(CliError::UnknownOption(option.to_string()))
            }
            name => {
                let demo =
                    Demo::from_name(name).ok_or_else(|| CliError::UnknownDemo(name.to_string()))?;
                demos.push(demo);
            }
        }
    }
    if demos.is_empty() {
        demos.extend_from_slice(Demo::ALL);
    }
    Ok(Command::Run(demos))
}
