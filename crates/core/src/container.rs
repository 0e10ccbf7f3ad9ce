//! Textual container serialization and parsing.
//!
//! A container packages a codebook with the encoded content so the text
//! can be recovered without any out-of-band state:
//!
//! ```text
//! [Codes]
//! <code>='<escaped symbol>'
//! ...
//! [Content]
//! <concatenated codes, one ASCII '0'/'1' per bit>
//! ```
//!
//! Codebook lines are sorted by ascending code length. Content carries no
//! separators between codes; prefix-freedom makes the concatenation
//! unambiguous.
//!
//! # Marker matching
//!
//! `[Codes]` and `[Content]` are matched by substring containment, not
//! exact line equality, so containers that picked up CRLF endings or
//! leading whitespace in transit still parse.
//!
//! # Example
//! ```
//! use hufftext_core::container::{decode, encode};
//!
//! let container = encode("mississippi").unwrap();
//! assert_eq!(decode(&container).unwrap(), "mississippi");
//! ```

use crate::codebook::build_codes;
use crate::error::{ContainerError, Result};
use crate::escape::{escape_symbol, unescape_symbol};
use std::collections::HashMap;

/// Marker line opening the codebook section.
const CODES_MARKER: &str = "[Codes]";

/// Marker line opening the content section.
const CONTENT_MARKER: &str = "[Content]";

/// Encode text into a complete container.
///
/// Builds a fresh codebook for the text, serializes it sorted by code
/// length, then emits the concatenation of each character's code in input
/// order. No trailing newline; the caller owns line termination.
///
/// # Errors
/// Returns `CodebookError::EmptyText` for empty input.
pub fn encode(text: &str) -> Result<String> {
    let codebook = build_codes(text)?;

    let mut container = String::from(CODES_MARKER);
    for (code, symbol) in codebook.entries_by_length() {
        container.push('\n');
        container.push_str(code);
        container.push_str("='");
        container.push_str(&escape_symbol(symbol));
        container.push('\'');
    }

    container.push('\n');
    container.push_str(CONTENT_MARKER);
    container.push('\n');
    for symbol in text.chars() {
        // build_codes assigned a code to every character of the text
        if let Some(code) = codebook.code(symbol) {
            container.push_str(code);
        }
    }

    Ok(container)
}

/// Parser position within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Before the `[Codes]` marker
    SeekingCodes,
    /// Inside the codebook section
    ReadingCodes,
    /// Inside the content section
    ReadingContent,
}

/// Decode a container back into the original text.
///
/// Line-driven state machine: skip until the `[Codes]` marker, read one
/// codebook entry per line until the `[Content]` marker, then decode each
/// content line independently and concatenate the results.
///
/// # Errors
/// - `ContainerError::MissingCodesSection` / `MissingContentSection` if a
///   marker never appears
/// - `ContainerError::MalformedCodeLine` for a codebook line without `=`
///   or without the surrounding quotes
/// - `ContainerError::BadEscape` for an unparseable escaped symbol
/// - `ContainerError::ContentMismatch` if content bits do not resolve to a
///   sequence of codes
pub fn decode(container: &str) -> Result<String> {
    let mut state = DecodeState::SeekingCodes;
    let mut table: HashMap<String, char> = HashMap::new();
    let mut decoded = String::new();

    for line in container.lines() {
        match state {
            DecodeState::SeekingCodes => {
                if line.contains(CODES_MARKER) {
                    state = DecodeState::ReadingCodes;
                }
            }
            DecodeState::ReadingCodes => {
                if line.contains(CONTENT_MARKER) {
                    state = DecodeState::ReadingContent;
                } else {
                    let (code, symbol) = parse_code_line(line.trim_end())?;
                    table.insert(code, symbol);
                }
            }
            DecodeState::ReadingContent => {
                decode_content_line(line.trim_end(), &table, &mut decoded)?;
            }
        }
    }

    match state {
        DecodeState::ReadingContent => Ok(decoded),
        DecodeState::SeekingCodes => Err(ContainerError::MissingCodesSection.into()),
        DecodeState::ReadingCodes => Err(ContainerError::MissingContentSection.into()),
    }
}

/// Split a codebook line into `(code, symbol)`.
///
/// The separator is the first `=` on the line; the symbol portion must be
/// wrapped in single quotes, which are stripped before unescaping.
fn parse_code_line(line: &str) -> Result<(String, char)> {
    let malformed = || ContainerError::MalformedCodeLine {
        line: line.to_string(),
    };

    let (code, quoted) = line.split_once('=').ok_or_else(malformed)?;
    let escaped = quoted
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .ok_or_else(malformed)?;

    let symbol = unescape_symbol(escaped)?;
    Ok((code.to_string(), symbol))
}

/// Decode one content line, appending recovered characters to `out`.
///
/// Greedy resolution: grow the bit buffer one character at a time and emit
/// as soon as the buffer matches a code. Prefix-freedom guarantees the
/// first match is the only possible one, so no backtracking is needed.
fn decode_content_line(line: &str, table: &HashMap<String, char>, out: &mut String) -> Result<()> {
    let mut buffer = String::new();

    for bit in line.chars() {
        buffer.push(bit);
        if let Some(&symbol) = table.get(buffer.as_str()) {
            out.push(symbol);
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        return Err(ContainerError::ContentMismatch { leftover: buffer }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_round_trip_simple() {
        let text = "the quick brown fox jumps over the lazy dog";
        let container = encode(text).unwrap();
        assert_eq!(decode(&container).unwrap(), text);
    }

    #[test]
    fn test_single_symbol_container() {
        let container = encode("aaaa").unwrap();
        assert_eq!(container, "[Codes]\n1='a'\n[Content]\n1111");
        assert_eq!(decode(&container).unwrap(), "aaaa");
    }

    #[test]
    fn test_two_symbol_content_length() {
        let container = encode("aabb").unwrap();
        let content = container.lines().last().unwrap();
        assert_eq!(content.len(), 4);
        assert!(content.chars().all(|c| c == '0' || c == '1'));
        assert_eq!(decode(&container).unwrap(), "aabb");
    }

    #[test]
    fn test_round_trip_control_and_multibyte() {
        let text = "line one\nline two\ttabbed\r\nquote ' backslash \\ héllo 漢字 \x07";
        let container = encode(text).unwrap();
        assert_eq!(decode(&container).unwrap(), text);
    }

    #[test]
    fn test_codebook_lines_sorted_by_length() {
        let container = encode("aaaabbbccd").unwrap();
        let code_lines: Vec<&str> = container
            .lines()
            .skip(1)
            .take_while(|line| *line != "[Content]")
            .collect();

        let lengths: Vec<usize> = code_lines
            .iter()
            .map(|line| line.split_once('=').unwrap().0.len())
            .collect();
        for pair in lengths.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text = "abracadabra alakazam";
        let first = encode(text).unwrap();
        for _ in 0..5 {
            assert_eq!(encode(text).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(encode(""), Err(Error::Codebook(_))));
    }

    #[test]
    fn test_missing_codes_section() {
        let result = decode("no markers here\n0101");
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::MissingCodesSection))
        ));
    }

    #[test]
    fn test_missing_content_section() {
        let result = decode("[Codes]\n1='a'");
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::MissingContentSection))
        ));
    }

    #[test]
    fn test_malformed_code_line() {
        let result = decode("[Codes]\nthis line has no separator\n[Content]\n");
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::MalformedCodeLine { .. }))
        ));
    }

    #[test]
    fn test_unquoted_symbol_is_malformed() {
        let result = decode("[Codes]\n1=a\n[Content]\n1");
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::MalformedCodeLine { .. }))
        ));
    }

    #[test]
    fn test_dangling_bits_are_detected() {
        // "aabbc" yields codes {0, 10, 11}; a dangling '1' is a strict
        // prefix of two codes but matches no entry.
        let mut container = encode("aabbc").unwrap();
        container.push('1');

        let result = decode(&container);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::ContentMismatch { .. }))
        ));
    }

    #[test]
    fn test_loose_marker_matching() {
        // Markers embedded in longer lines still open their sections.
        let container = encode("aabb").unwrap();
        let loose = container
            .replacen("[Codes]", "  [Codes]  ", 1)
            .replacen("[Content]", "-- [Content] --", 1);
        assert_eq!(decode(&loose).unwrap(), "aabb");
    }

    #[test]
    fn test_crlf_container() {
        let container = encode("hello world").unwrap().replace('\n', "\r\n");
        assert_eq!(decode(&container).unwrap(), "hello world");
    }

    #[test]
    fn test_multiple_content_lines_accumulate() {
        // Two content lines, each a whole number of codes, decode in order.
        let container = encode("aaaa").unwrap();
        let split = container.replacen("1111", "11\n11", 1);
        assert_eq!(decode(&split).unwrap(), "aaaa");
    }

    #[test]
    fn test_symbol_equal_to_separator_round_trips() {
        let text = "a=b=c";
        let container = encode(text).unwrap();
        assert_eq!(decode(&container).unwrap(), text);
    }

    #[test]
    fn test_newline_symbol_round_trips() {
        let text = "a\nb\nc\n";
        let container = encode(text).unwrap();
        // The newline symbol must appear escaped, never literal, in the
        // codebook section.
        let codebook_section = container.split("[Content]").next().unwrap();
        assert!(codebook_section.contains("'\\n'"));
        assert_eq!(decode(&container).unwrap(), text);
    }
}
