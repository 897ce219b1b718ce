//! Depth-first traversal.
//!
//! Children are visited in storage order, which is the grammar order of each
//! kind, with lists flattened in place. Only populated slots are walked;
//! traversal never materializes placeholders.

use std::convert::Infallible;

use crate::{NodeId, Tree};

/// Callbacks for [`Tree::accept`]. `end_visit` fires once for every `visit`,
/// whether or not the visitor descended.
pub trait Visitor<'db> {
    /// Returns whether to descend into the children of `node`.
    fn visit(&mut self, tree: &Tree<'db>, node: NodeId) -> bool {
        let _ = (tree, node);
        true
    }

    fn end_visit(&mut self, tree: &Tree<'db>, node: NodeId) {
        let _ = (tree, node);
    }
}

/// A visitor that can stop the walk by returning an error. The error
/// unwinds the traversal and is handed back by [`Tree::try_accept`]; no
/// further callbacks run.
pub trait TryVisitor<'db> {
    type Error;

    fn visit(&mut self, tree: &Tree<'db>, node: NodeId) -> Result<bool, Self::Error>;

    fn end_visit(&mut self, tree: &Tree<'db>, node: NodeId) -> Result<(), Self::Error> {
        let _ = (tree, node);
        Ok(())
    }
}

struct Infallibly<'v, V>(&'v mut V);

impl<'db, V: Visitor<'db>> TryVisitor<'db> for Infallibly<'_, V> {
    type Error = Infallible;

    fn visit(&mut self, tree: &Tree<'db>, node: NodeId) -> Result<bool, Infallible> {
        Ok(self.0.visit(tree, node))
    }

    fn end_visit(&mut self, tree: &Tree<'db>, node: NodeId) -> Result<(), Infallible> {
        self.0.end_visit(tree, node);
        Ok(())
    }
}

impl<'db> Tree<'db> {
    #[track_caller]
    pub fn accept(&self, node: NodeId, visitor: &mut impl Visitor<'db>) {
        match self.try_accept(node, &mut Infallibly(visitor)) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    #[track_caller]
    pub fn try_accept<V: TryVisitor<'db>>(
        &self,
        node: NodeId,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        self.data(node);
        self.walk(node, visitor)
    }

    fn walk<V: TryVisitor<'db>>(&self, node: NodeId, visitor: &mut V) -> Result<(), V::Error> {
        if visitor.visit(self, node)? {
            for child in self.children(node) {
                self.walk(child, visitor)?;
            }
        }
        visitor.end_visit(self, node)
    }

    /// Iterator flavour of [`Tree::accept`], yielding enter and leave events.
    pub fn preorder(&self, node: NodeId) -> Preorder<'_, 'db> {
        Preorder::new(self, node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).next()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        self.children(parent).skip_while(|&child| child != node).nth(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    Enter(NodeId),
    Leave(NodeId),
}

pub struct Preorder<'t, 'db> {
    tree: &'t Tree<'db>,
    start: NodeId,
    next: Option<WalkEvent>,
    skip_subtree: bool,
}

impl<'t, 'db> Preorder<'t, 'db> {
    fn new(tree: &'t Tree<'db>, start: NodeId) -> Self {
        Self { tree, start, next: Some(WalkEvent::Enter(start)), skip_subtree: false }
    }

    /// Skips the children of the node most recently entered.
    pub fn skip_subtree(&mut self) {
        self.skip_subtree = true;
    }
}

impl Iterator for Preorder<'_, '_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skip_subtree {
            self.next = self.next.take().and_then(|next| match next {
                WalkEvent::Enter(first_child) => {
                    self.tree.parent(first_child).map(WalkEvent::Leave)
                }
                WalkEvent::Leave(node) => Some(WalkEvent::Leave(node)),
            });
            self.skip_subtree = false;
        }

        let next = self.next.take();
        self.next = next.and_then(|event| {
            Some(match event {
                WalkEvent::Enter(node) => match self.tree.first_child(node) {
                    Some(child) => WalkEvent::Enter(child),
                    None => WalkEvent::Leave(node),
                },
                WalkEvent::Leave(node) => {
                    if node == self.start {
                        return None;
                    }
                    match self.tree.next_sibling(node) {
                        Some(sibling) => WalkEvent::Enter(sibling),
                        None => WalkEvent::Leave(self.tree.parent(node)?),
                    }
                }
            })
        });
        next
    }
}
