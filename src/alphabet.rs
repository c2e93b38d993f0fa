use hufftree::Leaf;
use log::*;

pub const ALPHABET_SIZE: usize = 29;

/// space, the latin capital letters, comma and full stop
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    ' ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ',', '.',
];

pub type CountsTable = [u64; ALPHABET_SIZE];

/// position of the byte in [`ALPHABET`]. Lower case letters are not part of the alphabet.
#[inline]
pub fn symbol_index(byte: u8) -> Option<usize> {
    match byte {
        b' ' => Some(0),
        b'A'..=b'Z' => Some((byte - b'A') as usize + 1),
        b',' => Some(27),
        b'.' => Some(28),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCounts {
    counts: CountsTable,
    /// number of characters in the text, including the ones outside of the alphabet
    total_chars: usize,
}

impl SymbolCounts {
    pub fn counts(&self) -> &CountsTable {
        &self.counts
    }
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// share of every symbol in all characters of the text, 0 for an empty text
    pub fn probabilities(&self) -> [f32; ALPHABET_SIZE] {
        let mut probabilities = [0.0; ALPHABET_SIZE];
        if self.total_chars == 0 {
            return probabilities;
        }
        for (probability, count) in probabilities.iter_mut().zip(self.counts.iter()) {
            *probability = *count as f32 / self.total_chars as f32;
        }
        probabilities
    }

    /// one leaf per symbol in alphabet order. Symbols which never occur get weight 0,
    /// unless `skip_zero` is set.
    pub fn to_leaves(&self, skip_zero: bool) -> Vec<Leaf<char>> {
        ALPHABET
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, count)| !skip_zero || **count != 0)
            .map(|(symbol, count)| Leaf::new(*symbol, *count))
            .collect()
    }
}

/// number of utf-8 characters in the text, every byte which is not part of a valid
/// encoding counts as one character
pub fn count_chars(mut text: &[u8]) -> usize {
    let mut total = 0;
    loop {
        match std::str::from_utf8(text) {
            Ok(valid) => return total + valid.chars().count(),
            Err(err) => {
                let (valid, rest) = text.split_at(err.valid_up_to());
                total += String::from_utf8_lossy(valid).chars().count() + 1;
                text = &rest[1..];
            }
        }
    }
}

/// counts how often every alphabet symbol occurs in the text
#[inline]
pub fn count_alphabet(text: &[u8]) -> SymbolCounts {
    let mut counts = [0_u64; ALPHABET_SIZE];
    for byte in text {
        if let Some(pos) = symbol_index(*byte) {
            counts[pos] += 1;
        }
    }
    let total_chars = count_chars(text);
    debug!(
        "counted {} alphabet symbols in {} chars",
        counts.iter().sum::<u64>(),
        total_chars
    );
    SymbolCounts {
        counts,
        total_chars,
    }
}
