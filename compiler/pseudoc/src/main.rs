//! Pseudo CLI
//!
//! `pseudo FILE` runs a file; `pseudo` alone starts an interactive session.

mod commands;

use commands::{run_file, run_repl};
use pseudoc::{init_tracing, parse_args, usage, Command};

fn main() {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => print_usage(),
        Command::Version => println!("pseudo {}", env!("CARGO_PKG_VERSION")),
        Command::Run(options) => {
            let code = match &options.path {
                Some(path) => run_file(path, &options),
                None => run_repl(&options),
            };
            if code != 0 {
                std::process::exit(code);
            }
        }
    }
}

fn print_usage() {
    println!("{}", usage());
}
