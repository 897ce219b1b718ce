use text_size::TextRange;

use crate::error::{InvalidArgument, Result, TreeError, rejected};
use crate::visit::WalkEvent;
use crate::{NodeId, Tree, TreeId};

/// Offset index over the ranged nodes of one subtree.
///
/// The index is a snapshot: it records the tree's modification stamp when
/// built and refuses queries once the tree has changed.
#[derive(Debug, Clone)]
pub struct NodeFinder {
    tree: TreeId,
    stamp: u64,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    range: TextRange,
    node: NodeId,
    depth: usize,
}

impl NodeFinder {
    #[track_caller]
    pub fn new(tree: &Tree<'_>, root: NodeId) -> Self {
        let mut entries = Vec::new();
        let mut depth = 0;
        for event in tree.preorder(root) {
            match event {
                WalkEvent::Enter(node) => {
                    if let Some(range) = tree.range(node) {
                        entries.push(Entry { range, node, depth });
                    }
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }
        tracing::trace!(?root, entries = entries.len(), "offset index built");
        Self { tree: tree.id(), stamp: tree.modification_stamp(), entries }
    }

    /// The innermost node whose range contains `range`.
    pub fn covering_node(&self, tree: &Tree<'_>, range: TextRange) -> Result<Option<NodeId>> {
        self.check(tree)?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.range.contains_range(range))
            .max_by_key(|entry| entry.depth)
            .map(|entry| entry.node))
    }

    /// The outermost node whose range lies inside `range`, first in preorder.
    pub fn covered_node(&self, tree: &Tree<'_>, range: TextRange) -> Result<Option<NodeId>> {
        self.check(tree)?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| range.contains_range(entry.range))
            .min_by_key(|entry| entry.depth)
            .map(|entry| entry.node))
    }

    fn check(&self, tree: &Tree<'_>) -> Result<()> {
        if tree.id() != self.tree {
            return Err(rejected(InvalidArgument::ForeignTree));
        }
        let current = tree.modification_stamp();
        if current != self.stamp {
            let error = TreeError::IllegalState { built: self.stamp, current };
            tracing::debug!(%error, "stale offset index");
            return Err(error);
        }
        Ok(())
    }
}
