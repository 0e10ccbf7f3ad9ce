//! hufftext: encode and decode text using Huffman's algorithm.
//!
//! Thin I/O shell around `hufftext-core`: selects a command, feeds the
//! codec one complete input string, and writes one complete output string.

mod cli;

use cli::Command;
use hufftext_core::{decode, encode};
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(command) = Command::from_args(&args) else {
        cli::print_usage();
        std::process::exit(2);
    };

    if let Err(err) = run(command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> hufftext_core::Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Encode { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let container = encode(&text)?;
            stdout.write_all(container.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
        Command::Decode => {
            let container = read_stdin()?;
            let text = decode(&container)?;
            stdout.write_all(text.as_bytes())?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
