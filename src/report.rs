use std::fmt::Write;

use hufftree::{build_tree, render_dot, Tree};
use log::*;

use crate::alphabet::{SymbolCounts, ALPHABET};
use crate::error::{Error, Result};

/// builds the tree over the alphabet, an empty alphabet is an error here
pub fn build_alphabet_tree(counts: &SymbolCounts, skip_zero: bool) -> Result<Tree<char>> {
    let leaves = counts.to_leaves(skip_zero);
    info!("building tree from {} symbols", leaves.len());
    build_tree(leaves).ok_or(Error::EmptyAlphabet)
}

/// one `'c':p` line per alphabet symbol
pub fn format_distribution(counts: &SymbolCounts) -> String {
    let mut out = String::new();
    for (symbol, probability) in ALPHABET.iter().zip(counts.probabilities().iter()) {
        // writing into a String can't fail
        let _ = writeln!(out, "'{}':{}", symbol, probability);
    }
    out
}

/// one `'c': code` line per leaf, depth first
pub fn format_codes(tree: &Tree<char>) -> String {
    tree.to_string()
}

pub fn format_dot(tree: &Tree<char>) -> Result<String> {
    let mut out = String::new();
    render_dot(tree, &mut out)?;
    Ok(out)
}
