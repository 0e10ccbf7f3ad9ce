//! Symbol escaping for the line-oriented container format.
//!
//! Codebook lines carry one symbol each, so a symbol whose literal value is
//! a newline (or other control character) would break line parsing. Symbols
//! are therefore rendered through an explicit escape table before they are
//! written, and parsed back through the exact inverse on read.
//!
//! # Escape table
//!
//! | Character            | Escaped form |
//! |----------------------|--------------|
//! | `\`                  | `\\`         |
//! | `'`                  | `\'`         |
//! | newline              | `\n`         |
//! | carriage return      | `\r`         |
//! | tab                  | `\t`         |
//! | NUL                  | `\0`         |
//! | other control chars  | `\u{XXXX}`   |
//! | everything else      | verbatim     |
//!
//! The mapping is invertible for every `char`: `unescape_symbol` rejects
//! anything `escape_symbol` could not have produced.

use crate::error::{ContainerError, Result};

/// Render a symbol so it is safe to embed in a single container line.
pub fn escape_symbol(symbol: char) -> String {
    match symbol {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\0' => "\\0".to_string(),
        c if c.is_control() => format!("\\u{{{:x}}}", c as u32),
        c => c.to_string(),
    }
}

/// Parse an escaped symbol back to the original character.
///
/// # Errors
/// Returns `ContainerError::BadEscape` for a truncated escape, an unknown
/// escape letter, a malformed `\u{...}` payload, or input that is not
/// exactly one symbol.
pub fn unescape_symbol(escaped: &str) -> Result<char> {
    let bad = || ContainerError::BadEscape {
        escaped: escaped.to_string(),
    };

    let mut chars = escaped.chars();
    let symbol = match chars.next().ok_or_else(bad)? {
        '\\' => match chars.next().ok_or_else(bad)? {
            '\\' => '\\',
            '\'' => '\'',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'u' => parse_unicode_escape(&mut chars).ok_or_else(bad)?,
            _ => return Err(bad().into()),
        },
        c => c,
    };

    // Exactly one symbol per entry; trailing characters mean the line was
    // not produced by our encoder.
    if chars.next().is_some() {
        return Err(bad().into());
    }
    Ok(symbol)
}

/// Parse the `{XXXX}` tail of a `\u{...}` escape.
fn parse_unicode_escape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    if chars.next() != Some('{') {
        return None;
    }
    let mut hex = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            let value = u32::from_str_radix(&hex, 16).ok()?;
            return char::from_u32(value);
        }
        hex.push(c);
    }
    // Ran out of input before the closing brace
    None
}
