use super::tree_node::{Code, Node, NodeId};
use crate::error::{Error, Result};

/// A huffman tree. All nodes live in one arena, the tree is never changed after it is built.
#[derive(Debug, Clone)]
pub struct Tree<S> {
    /// the leafs are at the beginning, sorted ASC by weight. They are followed by the parents
    /// in the order they were merged, so a parent is always behind its children.
    pub(crate) nodes: Vec<Node<S>>,
    /// the root node is the last parent, or the single leaf if there was only one
    pub(crate) root_node: NodeId,
    pub(crate) num_leaves: usize,
}

impl<S> Tree<S> {
    pub fn root(&self) -> NodeId {
        self.root_node
    }
    pub fn node(&self, node: NodeId) -> Result<&Node<S>> {
        self.nodes.get(node.0).ok_or(Error::UnknownNode(node))
    }
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// returns the ids of all leafs in the order they were sorted by the builder
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.num_leaves).map(NodeId)
    }

    pub fn find_leaf(&self, symbol: &S) -> Option<NodeId>
    where
        S: PartialEq,
    {
        self.nodes[..self.num_leaves]
            .iter()
            .position(|node| node.symbol.as_ref() == Some(symbol))
            .map(NodeId)
    }

    /// Reads the code of a node by walking up to the root.
    ///
    /// The transition nearest to the node ends up in bit 0, the one at the root in the highest
    /// bit, so reading `len` bits from the most significant one downwards gives the path from
    /// the root to the node.
    pub fn code_of(&self, node: NodeId) -> Result<Code> {
        let mut current = node;
        let mut parent = self.node(node)?.parent;
        let mut bits = 0_u64;
        let mut len = 0_u8;
        while let Some(parent_pos) = parent {
            if len == 64 {
                return Err(Error::CodeTooLong {
                    depth: self.depth_of(node)?,
                });
            }
            let parent_node = &self.nodes[parent_pos.0];
            if parent_node.right == Some(current) {
                bits |= 1 << len;
            }
            len += 1;
            current = parent_pos;
            parent = parent_node.parent;
        }
        Ok(Code::new(bits, len))
    }

    /// number of edges between the root and the node
    pub fn depth_of(&self, node: NodeId) -> Result<usize> {
        let mut parent = self.node(node)?.parent;
        let mut depth = 0;
        while let Some(parent_pos) = parent {
            depth += 1;
            parent = self.nodes[parent_pos.0].parent;
        }
        Ok(depth)
    }

    /// returns every symbol with its code, in leaf order
    pub fn code_table(&self) -> Result<Vec<(&S, Code)>> {
        self.leaves()
            .filter_map(|id| {
                let node = &self.nodes[id.0];
                node.symbol.as_ref().map(|symbol| (symbol, id))
            })
            .map(|(symbol, id)| self.code_of(id).map(|code| (symbol, code)))
            .collect()
    }

    /// depth of every node, indexed like the arena
    fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.nodes.len()];
        // parents are behind their children, so walking backwards from the root visits every
        // parent before its children
        for pos in (self.num_leaves..self.nodes.len()).rev() {
            let node = &self.nodes[pos];
            for child in node.left.iter().chain(node.right.iter()) {
                depths[child.0] = depths[pos] + 1;
            }
        }
        depths
    }

    pub fn max_depth(&self) -> usize {
        self.depths()[..self.num_leaves]
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// sum of weight * code length over all leafs, the cost of the tree
    ///
    /// Only the sum of the weights has to fit into an u64, the cost can be bigger.
    pub fn weighted_code_length(&self) -> u128 {
        self.depths()[..self.num_leaves]
            .iter()
            .zip(&self.nodes)
            .map(|(depth, node)| u128::from(node.weight) * *depth as u128)
            .sum()
    }

    /// Walks the tree depth first, left before right, starting with the root.
    ///
    /// `fun` gets the node, the transitions from the root to it and its depth. Only the last 64
    /// transitions are kept.
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(NodeId, &Node<S>, u64, usize),
    {
        let mut stack = vec![(self.root_node, 0_u64, 0_usize)];
        while let Some((pos, transitions, depth)) = stack.pop() {
            let node = &self.nodes[pos.0];
            fun(pos, node, transitions, depth);
            if let Some(right) = node.right {
                stack.push((right, (transitions << 1) | 1, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, transitions << 1, depth + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::tree_node::Leaf;
    use crate::*;

    fn textbook_tree() -> Tree<char> {
        let leaves = vec![
            Leaf::new('A', 5),
            Leaf::new('B', 9),
            Leaf::new('C', 12),
            Leaf::new('D', 13),
            Leaf::new('E', 16),
            Leaf::new('F', 45),
        ];
        build_tree(leaves).unwrap()
    }

    #[test]
    fn code_length_is_depth() {
        let tree = textbook_tree();
        for id in tree.leaves() {
            let code = tree.code_of(id).unwrap();
            assert_eq!(code.len() as usize, tree.depth_of(id).unwrap());
        }
        assert_eq!(tree.depth_of(tree.root()).unwrap(), 0);
        assert_eq!(tree.code_of(tree.root()).unwrap(), Code::default());
        assert_eq!(tree.max_depth(), 4);
    }

    #[test]
    fn code_of_internal_node() {
        let tree = textbook_tree();
        let root = tree.node(tree.root()).unwrap();
        // right child of the root is the parent with weight 55
        let right = root.right().unwrap();
        assert_eq!(tree.node(right).unwrap().weight(), 55);
        assert_eq!(tree.code_of(right).unwrap().to_string(), "1");
    }

    #[test]
    fn unknown_node() {
        let tree = textbook_tree();
        let other = build_tree(vec![Leaf::new('x', 1); 20]).unwrap();
        let foreign = NodeId(other.num_nodes() - 1);
        assert!(matches!(tree.code_of(foreign), Err(Error::UnknownNode(_))));
        assert!(matches!(tree.depth_of(foreign), Err(Error::UnknownNode(_))));
        assert!(tree.node(foreign).is_err());
    }

    #[test]
    fn code_too_long() {
        // zero weights build a list, the first leaf is 69 levels deep
        let tree = build_tree(vec![Leaf::new(0_u8, 0); 70]).unwrap();
        let deepest = tree.leaves().next().unwrap();
        assert_eq!(tree.depth_of(deepest).unwrap(), 69);
        assert!(matches!(
            tree.code_of(deepest),
            Err(Error::CodeTooLong { depth: 69 })
        ));
        assert!(tree.code_table().is_err());

        // exactly 64 bits still fit
        let tree = build_tree(vec![Leaf::new(0_u8, 0); 65]).unwrap();
        let deepest = tree.leaves().next().unwrap();
        assert_eq!(tree.code_of(deepest).unwrap().len(), 64);
    }

    #[test]
    fn cost_bigger_than_u64() {
        let third = u64::MAX / 3;
        let tree = build_tree(vec![
            Leaf::new('a', third),
            Leaf::new('b', third),
            Leaf::new('c', 1),
        ])
        .unwrap();
        assert_eq!(tree.node(tree.root()).unwrap().weight(), 2 * third + 1);
        // c + a is heavier than b, so b gets the short code
        let depth = |symbol| tree.depth_of(tree.find_leaf(&symbol).unwrap()).unwrap();
        assert_eq!((depth('a'), depth('b'), depth('c')), (2, 1, 2));
        assert_eq!(tree.weighted_code_length(), u128::from(u64::MAX) + 2);
    }

    #[test]
    fn walk_tree_matches_code_of() {
        let tree = textbook_tree();
        let mut visited = 0;
        tree.walk_tree(&mut |id, node, transitions, depth| {
            visited += 1;
            let code = tree.code_of(id).unwrap();
            assert_eq!(code.bits(), transitions);
            assert_eq!(code.len() as usize, depth);
            assert_eq!(node.is_leaf(), node.symbol().is_some());
        });
        assert_eq!(visited, tree.num_nodes());
        assert_eq!(tree.num_nodes(), 2 * tree.num_leaves() - 1);
    }

    #[test]
    fn code_table_in_leaf_order() {
        let tree = textbook_tree();
        let table: Vec<(char, String)> = tree
            .code_table()
            .unwrap()
            .into_iter()
            .map(|(symbol, code)| (*symbol, code.to_string()))
            .collect();
        assert_eq!(
            table,
            vec![
                ('A', "1100".to_string()),
                ('B', "1101".to_string()),
                ('C', "100".to_string()),
                ('D', "101".to_string()),
                ('E', "111".to_string()),
                ('F', "0".to_string()),
            ]
        );
    }

    #[test]
    fn concurrent_code_reads() {
        let tree = textbook_tree();
        let expected = tree.code_table().unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (pos, id) in tree.leaves().enumerate() {
                        assert_eq!(tree.code_of(id).unwrap(), expected[pos].1);
                    }
                });
            }
        });
    }
}
