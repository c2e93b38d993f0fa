use log::Level::Trace;
use log::*;

use crate::tree::tree_node::{cmp_by_weight, Leaf, Node, NodeId};
use crate::tree::Tree;

/// creates a huffman tree from the leafs, or `None` if there are no leafs
///
/// The leafs are sorted stable by weight first, so leafs with equal weight keep their
/// relative order and the same input always results in the same tree.
/// The vec is consumed, use [`build_tree_from_slice`] to keep the input.
#[inline]
pub fn build_tree<S>(mut leaves: Vec<Leaf<S>>) -> Option<Tree<S>> {
    // sort once, later on the merged nodes are inserted via binary search
    leaves.sort_by(cmp_by_weight);
    build_tree_sorted(leaves)
}

/// same as [`build_tree`], but copies the leafs
pub fn build_tree_from_slice<S: Clone>(leaves: &[Leaf<S>]) -> Option<Tree<S>> {
    build_tree(leaves.to_vec())
}

/// creates a huffman tree from leafs which are already sorted ASC by weight
///
/// The sum of all weights has to fit into an u64.
pub fn build_tree_sorted<S>(leaves: Vec<Leaf<S>>) -> Option<Tree<S>> {
    if leaves.is_empty() {
        debug!("no leafs, no tree");
        return None;
    }
    debug_assert!(
        leaves.windows(2).all(|pair| pair[0].weight <= pair[1].weight),
        "leafs are not sorted by weight"
    );

    let num_leaves = leaves.len();
    // a binary tree with n leafs has n - 1 parents
    let mut nodes: Vec<Node<S>> = Vec::with_capacity(2 * num_leaves - 1);
    nodes.extend(leaves.into_iter().map(Node::from));

    // ids of the nodes without parent, sorted ASC by weight, starting at `start`
    let mut queue: Vec<NodeId> = (0..num_leaves).map(NodeId).collect();
    let mut start = 0;

    while queue.len() - start > 1 {
        let left = queue[start];
        let right = queue[start + 1];
        let weight = nodes[left.0].weight + nodes[right.0].weight;

        let parent = NodeId(nodes.len());
        nodes.push(Node::internal(weight, left, right));
        nodes[left.0].parent = Some(parent);
        nodes[right.0].parent = Some(parent);

        // insert in front of the first node with a weight >= the new weight
        let tail = &queue[start + 2..];
        let insert_pos = start + 2 + tail.partition_point(|id| nodes[id.0].weight < weight);

        // the slot of `left` is free, move everything in front of the insert position one slot to the front
        queue.copy_within(start + 2..insert_pos, start + 1);
        queue[insert_pos - 1] = parent;
        start += 1;

        if log_enabled!(Trace) {
            trace!(
                "merged {:?}({}) and {:?}({}) into {:?}({}) at queue pos {}",
                left,
                nodes[left.0].weight,
                right,
                nodes[right.0].weight,
                parent,
                weight,
                insert_pos - start
            );
        }
    }

    let root_node = queue[start];
    debug!(
        "built tree from {} leafs, {} nodes, root weight {}",
        num_leaves,
        nodes.len(),
        nodes[root_node.0].weight
    );

    Some(Tree {
        nodes,
        root_node,
        num_leaves,
    })
}
