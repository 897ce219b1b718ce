use crate::NodeId;
use crate::property::PropertyDescriptor;

/// Structural change reported to a [`TreeObserver`].
///
/// `node` is always the node whose property changed. Clone events carry the
/// source node, which may live in another tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// A single-child slot changed. `new` is `None` when the child was
    /// detached and the slot left unset.
    ReplaceChild {
        node: NodeId,
        property: &'static PropertyDescriptor,
        old: Option<NodeId>,
        new: Option<NodeId>,
    },
    AddChild { node: NodeId, property: &'static PropertyDescriptor, index: usize, child: NodeId },
    RemoveChild {
        node: NodeId,
        property: &'static PropertyDescriptor,
        index: usize,
        child: NodeId,
    },
    /// A list element was replaced in place.
    ReplaceElement {
        node: NodeId,
        property: &'static PropertyDescriptor,
        index: usize,
        old: NodeId,
        new: NodeId,
    },
    ValueChange { node: NodeId, property: &'static PropertyDescriptor },
    /// A placeholder was materialized. Reported through `post` only.
    LazyInit { node: NodeId, property: &'static PropertyDescriptor, child: NodeId },
    /// A subtree is being copied into this tree. `copy` is `None` in `pre`.
    Clone { source: NodeId, copy: Option<NodeId> },
}

/// Hook notified around every accepted structural change of one tree.
/// Rejected mutations produce no events.
pub trait TreeObserver {
    fn pre(&mut self, event: &TreeEvent) {
        let _ = event;
    }

    fn post(&mut self, event: &TreeEvent) {
        let _ = event;
    }
}
