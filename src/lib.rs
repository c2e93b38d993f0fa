/*!
huffcanon prints the huffman codes of a text over a fixed alphabet of 29 symbols: space, the
capital letters `A` to `Z`, comma and full stop.

The counting and printing lives here, the tree itself is built by [`hufftree`], which
knows nothing about the alphabet.
*/

pub mod alphabet;
mod error;
pub mod report;

pub use crate::alphabet::{count_alphabet, count_chars, symbol_index, SymbolCounts, ALPHABET, ALPHABET_SIZE};
pub use crate::error::{Error, Result};
pub use crate::report::{build_alphabet_tree, format_codes, format_distribution, format_dot};
pub use hufftree;
