//! Command-line parsing for the hufftext application.
//!
//! Two commands:
//! - `encode` takes the remaining arguments as the text (joined with
//!   spaces), or reads all of stdin when no text argument is given
//! - `decode` always reads a container from stdin
//!
//! Anything else prints a one-line usage message and nothing more.

/// The selected command for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode the given text, or stdin when `text` is None
    Encode { text: Option<String> },

    /// Decode a container read from stdin
    Decode,
}

impl Command {
    /// Parse the command from arguments (without the program name).
    ///
    /// Returns None for a missing or unknown command; the caller prints
    /// usage and exits.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args.first().map(String::as_str) {
            Some("encode") => {
                let text = if args.len() > 1 {
                    Some(args[1..].join(" "))
                } else {
                    None
                };
                Some(Command::Encode { text })
            }
            Some("decode") => Some(Command::Decode),
            _ => None,
        }
    }
}

/// Print the one-line usage message.
pub fn print_usage() {
    println!("usage: hufftext [encode|decode] [<text>]");
}
