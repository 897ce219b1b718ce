use std::fmt;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};

use la_arena::{Arena, Idx, RawIdx};
use text_size::TextRange;
use trellis_span::Symbol;

use crate::error::{InvalidArgument, Result, rejected};
use crate::observer::{TreeEvent, TreeObserver};
use crate::property::{PropertyDescriptor, PropertyKind};
use crate::{NodeFlags, NodeKind, Scalar, ScalarType, ShapeVariant, TreeConfig};

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(NonZeroU32);

impl TreeId {
    fn fresh() -> Self {
        let id = NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU32::new(id).unwrap_or(NonZeroU32::MIN))
    }
}

/// Handle to a node: the owning tree plus the node's arena slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: TreeId,
    raw: RawIdx,
}

impl NodeId {
    pub(crate) fn new(tree: TreeId, raw: RawIdx) -> Self {
        Self { tree, raw }
    }

    pub fn tree(self) -> TreeId {
        self.tree
    }

    pub(crate) fn raw(self) -> RawIdx {
        self.raw
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{})", self.tree.0, u32::from(self.raw))
    }
}

/// Where a node is attached: its parent and the primary descriptor of the
/// slot holding it.
#[derive(Clone, Copy)]
pub(crate) struct Location {
    pub(crate) parent: RawIdx,
    pub(crate) property: &'static PropertyDescriptor,
}

#[derive(Clone)]
pub(crate) enum Slot<'db> {
    Scalar(Scalar<'db>),
    Child(Option<RawIdx>),
    List(Vec<RawIdx>),
}

pub(crate) struct NodeData<'db> {
    pub(crate) kind: NodeKind,
    pub(crate) range: Option<TextRange>,
    pub(crate) flags: NodeFlags,
    pub(crate) location: Option<Location>,
    pub(crate) slots: Box<[Slot<'db>]>,
}

/// Interned default texts of the symbol-valued scalars.
struct ScalarDefaults<'db> {
    missing: Symbol<'db>,
    zero: Symbol<'db>,
    empty: Symbol<'db>,
}

/// Owning arena of one syntax tree.
///
/// Every node handed out by a tree stays in its arena until the tree is
/// dropped. Reading accessors panic when given a [`NodeId`] of another tree;
/// mutating operations report [`InvalidArgument::ForeignTree`] instead.
///
/// Lazy placeholder materialization needs `&mut self`, so the exclusive
/// borrow is what guarantees a placeholder is built and published once.
/// Readers that cannot take `&mut` use [`Tree::peek_child`].
pub struct Tree<'db> {
    id: TreeId,
    config: TreeConfig,
    pub(crate) nodes: Arena<NodeData<'db>>,
    stamp: u64,
    defaults: ScalarDefaults<'db>,
    observer: Option<Box<dyn TreeObserver + Send + Sync>>,
}

impl<'db> Tree<'db> {
    pub fn new(db: &'db dyn salsa::Database, config: TreeConfig) -> Self {
        let defaults = ScalarDefaults {
            missing: Symbol::new(db, "MISSING"),
            zero: Symbol::new(db, "0"),
            empty: Symbol::new(db, ""),
        };
        Self {
            id: TreeId::fresh(),
            config,
            nodes: Arena::new(),
            stamp: 0,
            defaults,
            observer: None,
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn shape(&self) -> ShapeVariant {
        self.config.shape()
    }

    /// Counter bumped by every successful mutation. Caches keyed on a tree
    /// snapshot treat a change as invalidation.
    pub fn modification_stamp(&self) -> u64 {
        self.stamp
    }

    /// Number of nodes ever created in this tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_observer(&mut self, observer: impl TreeObserver + Send + Sync + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn take_observer(&mut self) -> Option<Box<dyn TreeObserver + Send + Sync>> {
        self.observer.take()
    }

    /// Creates a detached node with every scalar at its default, every
    /// child slot unset and every list empty.
    pub fn new_node(&mut self, kind: NodeKind) -> NodeId {
        let slots = kind
            .storage()
            .iter()
            .map(|property| match property.kind() {
                PropertyKind::Scalar(ty) => Slot::Scalar(self.default_scalar(ty)),
                PropertyKind::Child(_) => Slot::Child(None),
                PropertyKind::List(_) => Slot::List(Vec::new()),
            })
            .collect();
        self.alloc(kind, slots)
    }

    pub(crate) fn alloc(&mut self, kind: NodeKind, slots: Box<[Slot<'db>]>) -> NodeId {
        let data = NodeData {
            kind,
            range: None,
            flags: self.config.default_flags(),
            location: None,
            slots,
        };
        let idx = self.nodes.alloc(data);
        self.node_id(idx.into_raw())
    }

    #[track_caller]
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.data(node).kind
    }

    /// Source range of the node, `None` while unknown.
    #[track_caller]
    pub fn range(&self, node: NodeId) -> Option<TextRange> {
        self.data(node).range
    }

    pub fn set_range(&mut self, node: NodeId, range: TextRange) -> Result<()> {
        self.check_owned(node)?;
        self.data_mut(node).range = Some(range);
        self.modified();
        Ok(())
    }

    #[track_caller]
    pub fn flags(&self, node: NodeId) -> NodeFlags {
        self.data(node).flags
    }

    /// Replaces the node's flags. Allowed on protected nodes, so protection
    /// can be lifted again.
    pub fn set_flags(&mut self, node: NodeId, flags: NodeFlags) -> Result<()> {
        self.check_owned(node)?;
        self.data_mut(node).flags = flags;
        self.modified();
        Ok(())
    }

    #[track_caller]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).location.map(|location| self.node_id(location.parent))
    }

    /// The property of the parent that holds this node, as seen through the
    /// tree's shape variant.
    #[track_caller]
    pub fn location_in_parent(&self, node: NodeId) -> Option<&'static PropertyDescriptor> {
        let location = self.data(node).location?;
        let info = location.property.owner().info();
        Some(info.live_property(self.shape(), location.property.slot()))
    }

    /// The node followed by its parent, grandparent and so on.
    #[track_caller]
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.check_read(node);
        std::iter::successors(Some(node), |&it| self.parent(it))
    }

    #[track_caller]
    pub fn root(&self, node: NodeId) -> NodeId {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Direct children in storage order, lists flattened. Unset slots and
    /// slots outside this tree's shape are skipped; nothing is materialized.
    #[track_caller]
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let data = self.data(node);
        let info = data.kind.info();
        data.slots
            .iter()
            .enumerate()
            .filter(|&(slot, _)| info.slot_is_live(self.shape(), slot))
            .flat_map(|(_, slot)| match slot {
                Slot::Scalar(_) => &[][..],
                Slot::Child(child) => child.as_slice(),
                Slot::List(children) => children.as_slice(),
            })
            .map(|&raw| self.node_id(raw))
    }

    pub(crate) fn default_scalar(&self, ty: ScalarType) -> Scalar<'db> {
        match ty {
            ScalarType::Identifier => Scalar::Symbol(self.defaults.missing),
            ScalarType::Number => Scalar::Symbol(self.defaults.zero),
            ScalarType::OperatorToken => Scalar::Symbol(self.defaults.empty),
            ScalarType::PrefixOperator => Scalar::PrefixOperator(Default::default()),
            ScalarType::PostfixOperator => Scalar::PostfixOperator(Default::default()),
            ScalarType::PrimitiveType => Scalar::PrimitiveType(Default::default()),
        }
    }

    pub(crate) fn is_missing_identifier(&self, symbol: Symbol<'db>) -> bool {
        symbol == self.defaults.missing
    }

    pub(crate) fn node_id(&self, raw: RawIdx) -> NodeId {
        NodeId::new(self.id, raw)
    }

    #[track_caller]
    fn check_read(&self, node: NodeId) {
        assert!(node.tree == self.id, "{node:?} belongs to another tree");
    }

    pub(crate) fn check_owned(&self, node: NodeId) -> Result<()> {
        if node.tree != self.id {
            return Err(rejected(InvalidArgument::ForeignTree));
        }
        Ok(())
    }

    #[track_caller]
    pub(crate) fn data(&self, node: NodeId) -> &NodeData<'db> {
        self.check_read(node);
        &self.nodes[Idx::from_raw(node.raw)]
    }

    #[track_caller]
    pub(crate) fn data_mut(&mut self, node: NodeId) -> &mut NodeData<'db> {
        self.check_read(node);
        &mut self.nodes[Idx::from_raw(node.raw)]
    }

    pub(crate) fn raw_data(&self, raw: RawIdx) -> &NodeData<'db> {
        &self.nodes[Idx::from_raw(raw)]
    }

    pub(crate) fn raw_data_mut(&mut self, raw: RawIdx) -> &mut NodeData<'db> {
        &mut self.nodes[Idx::from_raw(raw)]
    }

    pub(crate) fn modified(&mut self) {
        self.stamp += 1;
    }

    pub(crate) fn notify_pre(&mut self, event: &TreeEvent) {
        if let Some(observer) = &mut self.observer {
            observer.pre(event);
        }
    }

    pub(crate) fn notify_post(&mut self, event: &TreeEvent) {
        if let Some(observer) = &mut self.observer {
            observer.post(event);
        }
    }
}

impl fmt::Debug for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("id", &self.id)
            .field("shape", &self.shape())
            .field("nodes", &self.nodes.len())
            .field("stamp", &self.stamp)
            .finish_non_exhaustive()
    }
}
