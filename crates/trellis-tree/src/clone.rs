use la_arena::RawIdx;
use text_size::TextRange;

use crate::error::{Result, TreeError, Unsupported, rejected};
use crate::observer::TreeEvent;
use crate::tree::{Location, Slot};
use crate::{NodeId, NodeKind, Scalar, Tree};

/// Owned image of a subtree, detached from any arena.
///
/// Only populated slots are captured, so taking an image never materializes
/// placeholders. Nodes are stored in preorder with the root first.
#[derive(Debug, Clone)]
pub struct Subtree<'db> {
    source: NodeId,
    nodes: Vec<ImageNode<'db>>,
}

#[derive(Debug, Clone)]
struct ImageNode<'db> {
    kind: NodeKind,
    range: Option<TextRange>,
    slots: Vec<ImageSlot<'db>>,
}

#[derive(Debug, Clone)]
enum ImageSlot<'db> {
    Scalar(Scalar<'db>),
    Child(Option<usize>),
    List(Vec<usize>),
}

impl Subtree<'_> {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'db> Tree<'db> {
    pub fn snapshot(&self, node: NodeId) -> Result<Subtree<'db>> {
        self.check_owned(node)?;
        let mut nodes = Vec::new();
        self.capture(node.raw(), &mut nodes);
        Ok(Subtree { source: node, nodes })
    }

    fn capture(&self, raw: RawIdx, nodes: &mut Vec<ImageNode<'db>>) -> usize {
        let index = nodes.len();
        let data = self.raw_data(raw);
        nodes.push(ImageNode { kind: data.kind, range: data.range, slots: Vec::new() });

        let slots = data
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Scalar(value) => ImageSlot::Scalar(*value),
                Slot::Child(child) => {
                    ImageSlot::Child(child.map(|child| self.capture(child, nodes)))
                }
                Slot::List(items) => {
                    ImageSlot::List(items.iter().map(|&item| self.capture(item, nodes)).collect())
                }
            })
            .collect();
        nodes[index].slots = slots;
        index
    }

    /// Materializes `subtree` as a new detached root of this tree. New nodes
    /// take this tree's default flags; ranges are preserved.
    ///
    /// Fails without allocating when the image populates a property this
    /// tree's shape does not have.
    pub fn graft(&mut self, subtree: &Subtree<'db>) -> Result<NodeId> {
        self.check_graftable(subtree)?;
        let source = subtree.source;
        self.notify_pre(&TreeEvent::Clone { source, copy: None });

        let base = self.len();
        let ids = subtree
            .nodes
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let slots = image
                    .slots
                    .iter()
                    .map(|slot| match slot {
                        ImageSlot::Scalar(value) => Slot::Scalar(*value),
                        ImageSlot::Child(child) => {
                            Slot::Child(child.map(|child| raw(base + child)))
                        }
                        ImageSlot::List(items) => {
                            Slot::List(items.iter().map(|&item| raw(base + item)).collect())
                        }
                    })
                    .collect();
                let id = self.alloc(image.kind, slots);
                debug_assert_eq!(u32::from(id.raw()) as usize, base + index);
                self.data_mut(id).range = image.range;
                id
            })
            .collect::<Vec<_>>();

        for (image, &id) in subtree.nodes.iter().zip(&ids) {
            for (slot, &storage) in image.slots.iter().zip(image.kind.storage()) {
                let children = match slot {
                    ImageSlot::Scalar(_) => &[][..],
                    ImageSlot::Child(child) => child.as_slice(),
                    ImageSlot::List(items) => items.as_slice(),
                };
                for &child in children {
                    let location = Location { parent: id.raw(), property: storage };
                    self.data_mut(ids[child]).location = Some(location);
                }
            }
        }

        let copy = ids[0];
        self.notify_post(&TreeEvent::Clone { source, copy: Some(copy) });
        tracing::trace!(?source, ?copy, nodes = ids.len(), "subtree cloned");
        Ok(copy)
    }

    fn check_graftable(&self, subtree: &Subtree<'db>) -> Result<()> {
        let shape = self.shape();
        for image in &subtree.nodes {
            let info = image.kind.info();
            for (slot, (value, &property)) in image.slots.iter().zip(info.storage).enumerate() {
                let populated = match value {
                    ImageSlot::Scalar(_) => false,
                    ImageSlot::Child(child) => child.is_some(),
                    ImageSlot::List(items) => !items.is_empty(),
                };
                if populated && !info.slot_is_live(shape, slot) {
                    return Err(rejected(TreeError::UnsupportedOperation {
                        kind: image.kind,
                        property: property.name(),
                        reason: Unsupported::NotInShape(shape),
                    }));
                }
            }
        }
        Ok(())
    }

    /// Deep copy of `node` into `target`, which may be a different tree
    /// interning through the same database.
    pub fn clone_subtree(&self, node: NodeId, target: &mut Self) -> Result<NodeId> {
        let subtree = self.snapshot(node)?;
        target.graft(&subtree)
    }

    /// Deep copy of `node` within this tree.
    pub fn copy_subtree(&mut self, node: NodeId) -> Result<NodeId> {
        let subtree = self.snapshot(node)?;
        self.graft(&subtree)
    }

    /// Copies each node of `nodes` into `target`, preserving order.
    pub fn clone_subtrees(
        &self,
        nodes: impl IntoIterator<Item = NodeId>,
        target: &mut Self,
    ) -> Result<Vec<NodeId>> {
        nodes.into_iter().map(|node| self.clone_subtree(node, target)).collect()
    }
}

fn raw(index: usize) -> RawIdx {
    RawIdx::from(index as u32)
}
