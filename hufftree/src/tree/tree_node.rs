use core::cmp::Ordering;

/// position of a node in the arena of a [`Tree`](crate::Tree)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A symbol with its weight, the input of the tree builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf<S> {
    pub symbol: S,
    /// relative frequency of the symbol
    pub weight: u64,
}

impl<S> Leaf<S> {
    pub fn new(symbol: S, weight: u64) -> Self {
        Leaf { symbol, weight }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Node<S> {
    /// only set on leafs
    pub(crate) symbol: Option<S>,
    /// weight of the symbol, or the sum of both children
    pub(crate) weight: u64,
    /// position of the left node in the arena
    pub(crate) left: Option<NodeId>,
    /// position of the right node in the arena
    pub(crate) right: Option<NodeId>,
    /// position of the parent node in the arena, written once when the node is merged
    pub(crate) parent: Option<NodeId>,
}

impl<S> Node<S> {
    pub(crate) fn internal(weight: u64, left: NodeId, right: NodeId) -> Self {
        Node {
            symbol: None,
            weight,
            left: Some(left),
            right: Some(right),
            parent: None,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }
    pub fn weight(&self) -> u64 {
        self.weight
    }
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }
}

impl<S> From<Leaf<S>> for Node<S> {
    fn from(leaf: Leaf<S>) -> Self {
        Node {
            symbol: Some(leaf.symbol),
            weight: leaf.weight,
            left: None,
            right: None,
            parent: None,
        }
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Node{{ symbol:{:?} weight:{} left:{:?} right:{:?} parent:{:?} }}",
            self.symbol, self.weight, self.left, self.right, self.parent
        ))
    }
}

/// Anything that takes part in the weight ordering of the builder.
pub trait Weighted {
    fn weight(&self) -> u64;
}

impl<S> Weighted for Leaf<S> {
    fn weight(&self) -> u64 {
        self.weight
    }
}

impl<S> Weighted for Node<S> {
    fn weight(&self) -> u64 {
        self.weight
    }
}

/// Ascending order by weight only. Symbols never take part, so elements with equal
/// weights compare as equal and a stable sort keeps their relative order.
#[inline]
pub fn cmp_by_weight<W: Weighted>(a: &W, b: &W) -> Ordering {
    a.weight().cmp(&b.weight())
}

/// The code of a node: the `len` low bits of `bits`, root to node when read from the
/// most significant of those bits downwards. 0 is a left transition, 1 a right one.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub(crate) bits: u64,
    pub(crate) len: u8,
}

impl Code {
    pub fn new(bits: u64, len: u8) -> Self {
        debug_assert!(len <= 64);
        Code { bits, len }
    }
    pub fn bits(&self) -> u64 {
        self.bits
    }
    pub fn len(&self) -> u8 {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// true if `self` is a prefix of `other`. Every code is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len > other.len {
            return false;
        }
        let shift = u32::from(other.len - self.len);
        other.bits.checked_shr(shift).unwrap_or(0) == self.bits
    }
}

impl core::fmt::Display for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for pos in (0..self.len).rev() {
            let bit = (self.bits >> pos) & 1;
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Code{{ bits:{} len:{} }}",
            self, self.len
        ))
    }
}

/// Returns the first pair of codes where one is a prefix of the other.
/// Compares every pair, so it is slow and meant for validation only.
pub fn find_prefix_violation(codes: &[Code]) -> Option<(Code, Code)> {
    for (pos, code) in codes.iter().enumerate() {
        for other in &codes[pos + 1..] {
            if code.is_prefix_of(other) || other.is_prefix_of(code) {
                return Some((*code, *other));
            }
        }
    }
    None
}
