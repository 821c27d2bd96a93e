use std::ops::Index;

use la_arena::{Arena, Idx};
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::NodeKind;

pub type NodeId = Idx<NodeData>;

/// A single node of a [`ParseTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: NodeKind,
    pub range: TextRange,

    /// The node that contains this node. This is a plain index into the same
    /// arena; nodes are owned by the tree, never by their parent.
    pub parent: Option<NodeId>,

    /// All direct children in source order.
    pub children: Vec<NodeId>,
}

/// The syntax tree of a single file. Construct one with a
/// [`TreeBuilder`](crate::TreeBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub(crate) nodes: Arena<NodeData>,
    pub(crate) root: NodeId,
}

impl Index<NodeId> for ParseTree {
    type Output = NodeData;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

impl ParseTree {
    /// Returns the root of the tree, usually a [`NodeKind::Module`].
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node].kind
    }

    pub fn range(&self, node: NodeId) -> TextRange {
        self.nodes[node].range
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// Returns the node itself followed by all of its ancestors, ending at the
    /// root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), move |&node| self.parent(node))
    }

    /// Returns the number of ancestors of `node`. The root has depth 0.
    pub fn depth(&self, node: NodeId) -> usize {
        self.ancestors(node).count() - 1
    }

    /// Returns the text of a [`NodeKind::Name`] node.
    pub fn name_value(&self, node: NodeId) -> Option<&SmolStr> {
        match self.kind(node) {
            NodeKind::Name { value } => Some(value),
            _ => None,
        }
    }

    /// Finds the most specific node whose range contains the offset. The end
    /// of a range is inclusive, so a node that ends exactly at `offset` is
    /// found as well; this is where the cursor sits right after typing a
    /// token. When two siblings touch at `offset` the first one wins.
    pub fn find_node_at_offset(&self, offset: TextSize) -> Option<NodeId> {
        let mut current = self.root;
        if !self.range(current).contains_inclusive(offset) {
            return None;
        }

        'descend: loop {
            for &child in self.children(current) {
                if self.range(child).contains_inclusive(offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeBuilder;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(start.into(), end.into())
    }

    /// Builds the tree for `foo.bar + 1`
    fn member_plus_number() -> (ParseTree, NodeId, NodeId, NodeId) {
        let mut builder = TreeBuilder::default();
        let foo = builder.alloc(NodeKind::Name { value: "foo".into() }, range(0, 3), vec![]);
        let bar = builder.alloc(NodeKind::Name { value: "bar".into() }, range(4, 7), vec![]);
        let access = builder.alloc(
            NodeKind::MemberAccess {
                left: foo,
                member: bar,
            },
            range(0, 7),
            vec![foo, bar],
        );
        let one = builder.alloc(NodeKind::Number, range(10, 11), vec![]);
        let binary = builder.alloc(NodeKind::BinaryOperation, range(0, 11), vec![access, one]);
        let list = builder.alloc(NodeKind::StatementList, range(0, 11), vec![binary]);
        let module = builder.alloc(NodeKind::Module, range(0, 12), vec![list]);
        let tree = builder.finish(module).unwrap();
        (tree, foo, bar, one)
    }

    #[test]
    fn find_node_prefers_deepest() {
        let (tree, foo, bar, one) = member_plus_number();
        assert_eq!(tree.find_node_at_offset(1.into()), Some(foo));
        assert_eq!(tree.find_node_at_offset(5.into()), Some(bar));
        assert_eq!(tree.find_node_at_offset(10.into()), Some(one));
    }

    #[test]
    fn find_node_at_end_of_token() {
        let (tree, foo, bar, _) = member_plus_number();

        // `foo|.bar`
        assert_eq!(tree.find_node_at_offset(3.into()), Some(foo));

        // `foo.bar|`
        assert_eq!(tree.find_node_at_offset(7.into()), Some(bar));
    }

    #[test]
    fn find_node_outside_root() {
        let (tree, ..) = member_plus_number();
        assert_eq!(tree.find_node_at_offset(13.into()), None);
        assert!(matches!(
            tree.kind(tree.find_node_at_offset(12.into()).unwrap()),
            NodeKind::Module
        ));
    }

    #[test]
    fn ancestors_and_depth() {
        let (tree, _, bar, one) = member_plus_number();
        assert_eq!(tree.depth(tree.root()), 0);
        assert_eq!(tree.depth(bar), 4);
        assert_eq!(tree.depth(one), 3);
        assert_eq!(tree.ancestors(bar).last(), Some(tree.root()));
        assert_eq!(tree.name_value(bar).map(SmolStr::as_str), Some("bar"));
        assert_eq!(tree.name_value(one), None);
    }
}
