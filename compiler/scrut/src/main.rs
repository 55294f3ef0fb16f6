//! Scrut CLI
//!
//! Runs the dispatcher demos. `scrut --list` shows what is available.

use std::io::Write;
use std::process::ExitCode;

use scrut::{init_tracing, parse_args, Command, Demo};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::List => {
            for demo in Demo::ALL {
                println!("{:<10} {}", demo.name(), demo.description());
            }
            ExitCode::SUCCESS
        }
        Command::Run(demos) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for demo in demos {
                if let Err(err) = demo.run(&mut out) {
                    let _ = out.flush();
                    eprintln!("error: demo `{}` failed: {err}", demo.name());
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_usage() {
    println!("Usage: scrut [--list] [demo...]");
    println!();
    println!("Runs every demo when none are named.");
    println!();
    println!("Environment:");
    println!("  SCRUT_LOG=<filter>   tracing filter (falls back to RUST_LOG, default `warn`)");
    println!("  SCRUT_LOG_TREE=1     indented span output");
}
