use la_arena::Arena;
use rustc_hash::FxHashSet;
use text_size::TextRange;

use crate::{NodeData, NodeId, NodeKind, ParseTree};

/// Errors that are detected when a [`TreeBuilder`] is finished.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {node:?} is not reachable from the root")]
    Orphan { node: NodeId },

    #[error("node {node:?} is a child of both {first:?} and {second:?}")]
    SharedChild {
        node: NodeId,
        first: NodeId,
        second: NodeId,
    },

    #[error("the root {root:?} has a parent")]
    RootHasParent { root: NodeId },

    #[error("child {child:?} at {child_range:?} lies outside of its parent {parent:?} at {parent_range:?}")]
    ChildOutOfRange {
        parent: NodeId,
        parent_range: TextRange,
        child: NodeId,
        child_range: TextRange,
    },

    #[error("children of {parent:?} are not in source order")]
    UnorderedChildren { parent: NodeId },
}

/// Builds a [`ParseTree`] bottom-up: children are allocated before the node
/// that contains them. Allocating a node links its children back to it.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Arena<NodeData>,
    shared: Vec<(NodeId, NodeId, NodeId)>,
}

impl TreeBuilder {
    /// Allocates a new node that owns the given `children`.
    pub fn alloc(&mut self, kind: NodeKind, range: TextRange, children: Vec<NodeId>) -> NodeId {
        let id = self.nodes.alloc(NodeData {
            kind,
            range,
            parent: None,
            children,
        });
        for idx in 0..self.nodes[id].children.len() {
            let child = self.nodes[id].children[idx];
            match self.nodes[child].parent {
                Some(first) => self.shared.push((child, first, id)),
                None => self.nodes[child].parent = Some(id),
            }
        }
        id
    }

    /// Returns the range of a node that was already allocated.
    pub fn range(&self, node: NodeId) -> TextRange {
        self.nodes[node].range
    }

    /// Validates the structure and returns the finished tree.
    pub fn finish(self, root: NodeId) -> Result<ParseTree, TreeError> {
        if let Some(&(node, first, second)) = self.shared.first() {
            return Err(TreeError::SharedChild {
                node,
                first,
                second,
            });
        }
        if self.nodes[root].parent.is_some() {
            return Err(TreeError::RootHasParent { root });
        }

        let mut reachable = FxHashSet::default();
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            reachable.insert(parent);
            let data = &self.nodes[parent];
            let mut previous_end = data.range.start();
            for &child in &data.children {
                let child_range = self.nodes[child].range;
                if !data.range.contains_range(child_range) {
                    return Err(TreeError::ChildOutOfRange {
                        parent,
                        parent_range: data.range,
                        child,
                        child_range,
                    });
                }
                if child_range.start() < previous_end {
                    return Err(TreeError::UnorderedChildren { parent });
                }
                previous_end = child_range.end();
                stack.push(child);
            }
        }

        if let Some((node, _)) = self.nodes.iter().find(|(id, _)| !reachable.contains(id)) {
            return Err(TreeError::Orphan { node });
        }

        Ok(ParseTree {
            nodes: self.nodes,
            root,
        })
    }
}
