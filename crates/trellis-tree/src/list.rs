use la_arena::RawIdx;
use rustc_hash::FxHashSet;

use crate::error::{InvalidArgument, Result, rejected};
use crate::observer::TreeEvent;
use crate::property::{PropertyDescriptor, PropertyKind};
use crate::{ChildType, NodeId, Tree};

/// Read-only view of a child list.
#[derive(Clone, Copy)]
pub struct NodeList<'t, 'db> {
    tree: &'t Tree<'db>,
    node: NodeId,
    property: &'static PropertyDescriptor,
}

impl<'t, 'db> NodeList<'t, 'db> {
    pub fn owner(&self) -> NodeId {
        self.node
    }

    pub fn property(&self) -> &'static PropertyDescriptor {
        self.property
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.items().get(index).map(|&raw| self.tree.node_id(raw))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = NodeId> + 't {
        let tree = self.tree;
        self.items().iter().map(move |&raw| tree.node_id(raw))
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }

    fn items(&self) -> &'t [RawIdx] {
        self.tree.list_items(self.node.raw(), self.property.slot())
    }
}

impl std::fmt::Debug for NodeList<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Editing handle for a child list. Every insertion runs the same checks as
/// [`Tree::set_child`].
pub struct NodeListMut<'t, 'db> {
    tree: &'t mut Tree<'db>,
    node: NodeId,
    property: &'static PropertyDescriptor,
    ty: ChildType,
}

impl<'db> NodeListMut<'_, 'db> {
    pub fn as_list(&self) -> NodeList<'_, 'db> {
        NodeList { tree: &*self.tree, node: self.node, property: self.property }
    }

    pub fn len(&self) -> usize {
        self.as_list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_list().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.as_list().get(index)
    }

    pub fn push(&mut self, child: NodeId) -> Result<()> {
        self.insert(self.len(), child)
    }

    pub fn insert(&mut self, index: usize, child: NodeId) -> Result<()> {
        self.insert_all(index, &[child])
    }

    /// Appends every child in order. Either all of them are attached or, on
    /// the first failing element, none are.
    pub fn extend(&mut self, children: impl IntoIterator<Item = NodeId>) -> Result<()> {
        let children = children.into_iter().collect::<Vec<_>>();
        self.insert_all(self.len(), &children)
    }

    /// Replaces the element at `index`, returning the detached element.
    pub fn set(&mut self, index: usize, child: NodeId) -> Result<NodeId> {
        self.check_index(index, self.len())?;
        self.tree.check_modifiable(self.node)?;
        self.tree.check_attachable(self.node, self.property, self.ty, child)?;

        let (tree, node, property) = (&mut *self.tree, self.node, self.property);
        let old = tree.node_id(tree.list_items(node.raw(), property.slot())[index]);
        let event = TreeEvent::ReplaceElement { node, property, index, old, new: child };
        tree.notify_pre(&event);
        tree.data_mut(old).location = None;
        tree.link(node, property, child.raw());
        tree.list_items_mut(node.raw(), property.slot())[index] = child.raw();
        tree.modified();
        tree.notify_post(&event);

        tracing::trace!(?node, property = property.name(), index, ?child, "element replaced");
        Ok(old)
    }

    /// Detaches and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<NodeId> {
        self.check_index(index, self.len())?;
        self.tree.check_modifiable(self.node)?;
        Ok(self.tree.remove_element(self.node, self.property, index))
    }

    /// Detaches every element, returning them in their former order.
    pub fn clear(&mut self) -> Result<Vec<NodeId>> {
        self.tree.check_modifiable(self.node)?;
        let mut removed = Vec::with_capacity(self.len());
        while !self.is_empty() {
            removed.push(self.tree.remove_element(self.node, self.property, 0));
        }
        Ok(removed)
    }

    fn insert_all(&mut self, index: usize, children: &[NodeId]) -> Result<()> {
        self.check_index(index, self.len() + 1)?;
        self.tree.check_modifiable(self.node)?;
        let mut seen = FxHashSet::default();
        for &child in children {
            if !seen.insert(child) {
                return Err(rejected(InvalidArgument::DuplicateInBatch));
            }
            self.tree.check_attachable(self.node, self.property, self.ty, child)?;
        }

        for (offset, &child) in children.iter().enumerate() {
            let (node, property, index) = (self.node, self.property, index + offset);
            let event = TreeEvent::AddChild { node, property, index, child };
            self.tree.notify_pre(&event);
            self.tree.link(node, property, child.raw());
            self.tree.list_items_mut(node.raw(), property.slot()).insert(index, child.raw());
            self.tree.modified();
            self.tree.notify_post(&event);
            tracing::trace!(?node, property = property.name(), index, ?child, "element added");
        }
        Ok(())
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index >= bound {
            let len = self.len();
            return Err(rejected(InvalidArgument::IndexOutOfBounds { index, len }));
        }
        Ok(())
    }
}

impl<'db> Tree<'db> {
    /// Read-only view of the list stored under `property`.
    pub fn list(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<NodeList<'_, 'db>> {
        self.check_property(node, property)?;
        expect_list_property(property)?;
        Ok(NodeList { tree: self, node, property })
    }

    pub fn list_mut(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<NodeListMut<'_, 'db>> {
        self.check_property(node, property)?;
        let ty = expect_list_property(property)?;
        Ok(NodeListMut { tree: self, node, property, ty })
    }

    /// Unlinks the element at a valid `index`. Callers have checked the
    /// index and that `node` is modifiable.
    pub(crate) fn remove_element(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        index: usize,
    ) -> NodeId {
        let child = self.node_id(self.list_items(node.raw(), property.slot())[index]);
        let event = TreeEvent::RemoveChild { node, property, index, child };
        self.notify_pre(&event);
        self.list_items_mut(node.raw(), property.slot()).remove(index);
        self.data_mut(child).location = None;
        self.modified();
        self.notify_post(&event);

        tracing::trace!(?node, property = property.name(), index, ?child, "element removed");
        child
    }
}

fn expect_list_property(property: &'static PropertyDescriptor) -> Result<ChildType> {
    match property.kind() {
        PropertyKind::List(ty) => Ok(ty),
        _ => Err(rejected(InvalidArgument::PropertyKind {
            property: property.name(),
            expected: "list",
        })),
    }
}
