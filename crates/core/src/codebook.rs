//! Huffman code construction.
//!
//! `build_codes` turns a piece of text into a prefix-free binary code:
//! each distinct character gets a string over {'0','1'}, and no code is a
//! proper prefix of another. Code lengths are Huffman-optimal with respect
//! to character frequency.
//!
//! # Algorithm
//!
//! Classic greedy binary merge, driven by an explicit min-priority queue:
//! seed one node per distinct character, repeatedly pop the two lightest
//! nodes, prepend '0' to the codes of everything in the first node's group
//! and '1' to everything in the second, then push the merged node. Nodes
//! are flat symbol groups, not a linked tree; only leaf identities matter,
//! never the tree shape.
//!
//! # Determinism
//!
//! Heap ordering is `(weight, creation order)`, and leaves are created in
//! first-appearance order of the text, so ties are broken by ascending
//! creation order. Repeated calls on the same text produce identical
//! codebooks regardless of `HashMap` iteration order.
//!
//! # Example
//! ```
//! use hufftext_core::codebook::build_codes;
//!
//! let codebook = build_codes("aaab").unwrap();
//! assert_eq!(codebook.code('a'), Some("1"));
//! assert_eq!(codebook.code('b'), Some("0"));
//! ```

use crate::error::{CodebookError, Result};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// A working node during construction: a group of characters and the
/// summed frequency of all of them.
///
/// `order` is a monotonically increasing creation id used as the heap
/// tie-break; it never affects code lengths, only which equal-weight node
/// ends up on the '0' branch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MergeNode {
    weight: u64,
    order: u64,
    symbols: Vec<char>,
}

impl Ord for MergeNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.weight, self.order).cmp(&(other.weight, other.order))
    }
}

impl PartialOrd for MergeNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete character-to-code mapping for one encode/decode session.
///
/// # Invariants
/// - Every code is non-empty and consists only of '0' and '1'
/// - The code set is prefix-free
#[derive(Debug, Clone)]
pub struct Codebook {
    codes: HashMap<char, String>,
}

impl Codebook {
    /// Look up the code for a character, if it appeared in the source text.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of distinct characters in the book.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the book holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All entries as `(code, symbol)` pairs, sorted by ascending code
    /// length with ties broken by the code string itself.
    ///
    /// This is the serialization order of the container format. Sorting by
    /// `(length, code)` rather than length alone makes the output fully
    /// deterministic; codes are unique so the order is total.
    pub fn entries_by_length(&self) -> Vec<(&str, char)> {
        let mut entries: Vec<(&str, char)> = self
            .codes
            .iter()
            .map(|(&symbol, code)| (code.as_str(), symbol))
            .collect();
        entries.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Build a Huffman codebook for the given text.
///
/// # Special cases
/// - A text with exactly one distinct character maps it to `"1"`; a
///   zero-length code could not be told apart from absent content.
///
/// # Errors
/// Returns `CodebookError::EmptyText` for empty input; there is nothing
/// to assign codes to.
pub fn build_codes(text: &str) -> Result<Codebook> {
    // Count frequencies, remembering first-appearance order so that node
    // creation (and therefore tie-breaking) is deterministic.
    let mut counts: HashMap<char, u64> = HashMap::new();
    let mut seen: Vec<char> = Vec::new();

    for symbol in text.chars() {
        let count = counts.entry(symbol).or_insert(0);
        if *count == 0 {
            seen.push(symbol);
        }
        *count += 1;
    }

    if seen.is_empty() {
        return Err(CodebookError::EmptyText.into());
    }

    let mut codes: HashMap<char, String> =
        seen.iter().map(|&symbol| (symbol, String::new())).collect();

    if seen.len() == 1 {
        codes.insert(seen[0], "1".to_string());
        return Ok(Codebook { codes });
    }

    let mut next_order: u64 = 0;
    let mut heap: BinaryHeap<Reverse<MergeNode>> = BinaryHeap::with_capacity(seen.len());

    for &symbol in &seen {
        heap.push(Reverse(MergeNode {
            weight: counts[&symbol],
            order: next_order,
            symbols: vec![symbol],
        }));
        next_order += 1;
    }

    loop {
        let first = match heap.pop() {
            Some(Reverse(node)) => node,
            None => break,
        };
        let second = match heap.pop() {
            Some(Reverse(node)) => node,
            // `first` was the last remaining node: construction is done
            None => break,
        };

        for &symbol in &first.symbols {
            if let Some(code) = codes.get_mut(&symbol) {
                code.insert(0, '0');
            }
        }
        for &symbol in &second.symbols {
            if let Some(code) = codes.get_mut(&symbol) {
                code.insert(0, '1');
            }
        }

        let mut symbols = first.symbols;
        symbols.extend(second.symbols);
        heap.push(Reverse(MergeNode {
            weight: first.weight + second.weight,
            order: next_order,
            symbols,
        }));
        next_order += 1;
    }

    Ok(Codebook { codes })
}
