/*!
hufftree builds deterministic huffman trees from weighted symbols and reads out the prefix code
of every symbol.

The leafs are sorted once, stable by weight. Afterwards the two lightest nodes are merged
repeatedly, and the new parent is put back into the sorted queue with a binary search instead of
sorting again or using a heap. Equal input therefore always results in the same tree, and leafs
with equal weight are merged in the order they were passed in.

```
use hufftree::{build_tree, Leaf};

let tree = build_tree(vec![Leaf::new('a', 1), Leaf::new('b', 1), Leaf::new('c', 3)]).unwrap();
let c = tree.find_leaf(&'c').unwrap();
assert_eq!(tree.code_of(c).unwrap().to_string(), "1");
```
*/

mod error;
pub mod tree;

pub use crate::error::{Error, Result};
pub use crate::tree::render_tree::render_dot;
pub use crate::tree::{
    build_tree, build_tree_from_slice, build_tree_sorted, cmp_by_weight, find_prefix_violation,
    minimum_tree_depth, Code, Leaf, Node, NodeId, Tree, Weighted,
};
