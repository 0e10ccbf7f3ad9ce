//! hufftext-core: Huffman text codec with a textual container format
//!
//! This library provides the core components for a tool that:
//! - Builds a prefix-free binary code for the characters of a text
//! - Serializes the codebook plus the encoded bitstring into a
//!   line-oriented textual container
//! - Parses a container and decodes the bitstring back to the text
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `codebook`: Huffman code construction
//! - `escape`: symbol escaping for the line-oriented format
//! - `container`: container serialization and the line-driven decoder
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: Identical input always yields an identical container
//! - **Self-contained**: A container carries everything needed to decode it

pub mod codebook;
pub mod container;
pub mod error;
pub mod escape;

// Re-export commonly used types
pub use codebook::{build_codes, Codebook};
pub use container::{decode, encode};
pub use error::{Error, Result};
