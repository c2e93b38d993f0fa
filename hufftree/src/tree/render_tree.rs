use crate::error::Result;
use crate::tree::{NodeId, Tree};
use std::borrow::Cow;
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    transition: u8, // 0 or 1
}

/// renders the tree in the graphviz dot format
pub fn render_dot<S: Debug, W: core::fmt::Write>(tree: &Tree<S>, output: &mut W) -> Result<()> {
    dot::render(tree, output)?;
    Ok(())
}

impl<'a, S: Debug + 'a> dot::Labeller<'a> for Tree<S> {
    type Node = NodeId;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").expect("valid dot id")
    }

    fn node_id(&'a self, n: &NodeId) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n.index())).expect("valid dot id")
    }

    fn node_label<'b>(&'b self, n: &NodeId) -> dot::LabelText<'b> {
        let node = &self.nodes[n.index()];
        let out = if let Some(symbol) = &node.symbol {
            format!("Weight:{:?} Symbl:{:?}", node.weight, symbol)
        } else {
            format!("Weight:{:?}", node.weight)
        };
        dot::LabelText::LabelStr(out.into())
    }

    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if self.nodes[n.index()].is_leaf() {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a, S: Debug + 'a> dot::GraphWalk<'a> for Tree<S> {
    type Node = NodeId;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<NodeId> {
        (0..self.nodes.len()).map(NodeId).collect()
    }

    fn edges(&self) -> dot::Edges<Edge> {
        let mut edges = vec![];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(left) = node.left {
                edges.push(Edge {
                    from: NodeId(i),
                    to: left,
                    transition: 0,
                });
            }
            if let Some(right) = node.right {
                edges.push(Edge {
                    from: NodeId(i),
                    to: right,
                    transition: 1,
                });
            }
        }
        Cow::Owned(edges)
    }

    fn source(&self, e: &Edge) -> NodeId {
        e.from
    }

    fn target(&self, e: &Edge) -> NodeId {
        e.to
    }
}

/// Lists every symbol with its code in binary, depth first, left before right.
impl<S: Debug> std::fmt::Display for Tree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut result = Ok(());
        self.walk_tree(&mut |_id, node, transitions, depth| {
            if result.is_err() {
                return;
            }
            if let Some(symbol) = &node.symbol {
                result = if depth <= 64 {
                    writeln!(f, "{:?}: {:0width$b}", symbol, transitions, width = depth)
                } else {
                    writeln!(f, "{:?}: <{} bits>", symbol, depth)
                };
            }
        });
        result
    }
}
