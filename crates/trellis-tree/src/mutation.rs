//! Single-child and scalar access, plus the checks every structural edit
//! runs before it touches the arena.

use la_arena::RawIdx;

use crate::error::{InvalidArgument, Result, TreeError, Unsupported, rejected};
use crate::observer::TreeEvent;
use crate::property::{PropertyDescriptor, PropertyKind, View};
use crate::tree::{Location, Slot};
use crate::{ChildType, NodeFlags, NodeId, Scalar, Tree};

/// Value of a structural property as seen through reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue<'db> {
    Scalar(Scalar<'db>),
    Child(Option<NodeId>),
    List(Vec<NodeId>),
}

impl<'db> Tree<'db> {
    /// Returns the child stored under `property`, materializing the
    /// placeholder of an unset mandatory slot. Unset optional slots yield
    /// `None`; mandatory ones never do.
    ///
    /// Materializing does not bump the modification stamp and is reported to
    /// the observer as [`TreeEvent::LazyInit`].
    pub fn child(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<Option<NodeId>> {
        if let Some(child) = self.peek_child(node, property)? {
            return Ok(Some(child));
        }
        let Some(placeholder) = property.placeholder() else {
            return Ok(None);
        };

        let child = self.new_node(placeholder);
        self.link(node, property, child.raw());
        match &mut self.data_mut(node).slots[property.slot()] {
            Slot::Child(slot) => *slot = Some(child.raw()),
            Slot::List(items) => items.push(child.raw()),
            Slot::Scalar(_) => unreachable!("{property:?} is not a child slot"),
        }

        self.notify_post(&TreeEvent::LazyInit { node, property, child });
        tracing::trace!(?node, property = property.name(), ?child, "placeholder materialized");
        Ok(Some(child))
    }

    /// Returns the child stored under `property` without materializing.
    pub fn peek_child(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<Option<NodeId>> {
        self.check_property(node, property)?;
        self.expect_child_property(property)?;
        self.current_child(node, property).map(|child| child.map(|raw| self.node_id(raw)))
    }

    /// Stores `child` under `property`, detaching the previous child first.
    ///
    /// Rejected when `child` is foreign, already parented, protected, of the
    /// wrong kind, or (on cycle-risk properties) an ancestor of `node`.
    pub fn set_child(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        child: NodeId,
    ) -> Result<()> {
        self.check_property(node, property)?;
        let ty = self.expect_child_property(property)?;
        self.check_modifiable(node)?;
        self.check_attachable(node, property, ty, child)?;
        let old = self.current_child(node, property)?;

        let event = TreeEvent::ReplaceChild {
            node,
            property,
            old: old.map(|raw| self.node_id(raw)),
            new: Some(child),
        };
        self.notify_pre(&event);
        if let Some(old) = old {
            self.raw_data_mut(old).location = None;
        }
        self.link(node, property, child.raw());
        match &mut self.data_mut(node).slots[property.slot()] {
            Slot::Child(slot) => *slot = Some(child.raw()),
            Slot::List(items) => {
                items.clear();
                items.push(child.raw());
            }
            Slot::Scalar(_) => unreachable!("{property:?} is not a child slot"),
        }
        self.modified();
        self.notify_post(&event);

        tracing::trace!(?node, property = property.name(), ?child, "child replaced");
        Ok(())
    }

    /// Unsets an optional child slot, returning the detached child.
    pub fn clear_child(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<Option<NodeId>> {
        self.check_property(node, property)?;
        self.expect_child_property(property)?;
        if property.is_mandatory() {
            return Err(rejected(InvalidArgument::MandatoryProperty(property.name())));
        }
        self.check_modifiable(node)?;

        let Some(old) = self.current_child(node, property)? else {
            return Ok(None);
        };
        let old = self.node_id(old);
        self.unset_single(node, property, old);
        Ok(Some(old))
    }

    /// Removes `node` from its parent. Single slots are left unset, so a
    /// mandatory slot materializes a fresh placeholder on its next read;
    /// list elements are removed. Detaching a root does nothing.
    pub fn detach(&mut self, node: NodeId) -> Result<()> {
        self.check_owned(node)?;
        let Some(Location { parent, property }) = self.data(node).location else {
            return Ok(());
        };
        let parent = self.node_id(parent);
        self.check_modifiable(parent)?;

        match property.kind() {
            PropertyKind::Child(_) => self.unset_single(parent, property, node),
            PropertyKind::List(_) => {
                let index = self
                    .list_items(parent.raw(), property.slot())
                    .iter()
                    .position(|&raw| raw == node.raw())
                    .unwrap_or_else(|| unreachable!("{node:?} is missing from its parent list"));
                self.remove_element(parent, property, index);
            }
            PropertyKind::Scalar(_) => unreachable!("{property:?} cannot hold a node"),
        }
        Ok(())
    }

    pub fn scalar(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<Scalar<'db>> {
        self.check_property(node, property)?;
        match self.data(node).slots[property.slot()] {
            Slot::Scalar(value) => Ok(value),
            _ => Err(rejected(InvalidArgument::PropertyKind {
                property: property.name(),
                expected: "scalar",
            })),
        }
    }

    /// Replaces a scalar value. Identifier and number properties reject the
    /// empty string.
    pub fn set_scalar(
        &mut self,
        db: &'db dyn salsa::Database,
        node: NodeId,
        property: &'static PropertyDescriptor,
        value: impl Into<Scalar<'db>>,
    ) -> Result<()> {
        let value = value.into();
        self.check_property(node, property)?;
        let PropertyKind::Scalar(ty) = property.kind() else {
            return Err(rejected(InvalidArgument::PropertyKind {
                property: property.name(),
                expected: "scalar",
            }));
        };
        if !value.conforms_to(ty) {
            return Err(rejected(InvalidArgument::ScalarMismatch {
                property: property.name(),
                expected: ty,
            }));
        }
        if ty.requires_text() && value.as_symbol().is_some_and(|symbol| symbol.is_empty(db)) {
            return Err(rejected(InvalidArgument::EmptyValue(property.name())));
        }
        self.check_modifiable(node)?;

        let event = TreeEvent::ValueChange { node, property };
        self.notify_pre(&event);
        self.data_mut(node).slots[property.slot()] = Slot::Scalar(value);
        self.modified();
        self.notify_post(&event);

        tracing::trace!(?node, property = property.name(), ?value, "value changed");
        Ok(())
    }

    /// Reads any live property of `node` generically. Single-child reads
    /// materialize placeholders like [`Tree::child`].
    pub fn structural_property(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<PropertyValue<'db>> {
        match property.kind() {
            PropertyKind::Scalar(_) => self.scalar(node, property).map(PropertyValue::Scalar),
            PropertyKind::Child(_) => self.child(node, property).map(PropertyValue::Child),
            PropertyKind::List(_) => Ok(PropertyValue::List(self.list(node, property)?.to_vec())),
        }
    }

    /// Writes a scalar or single-child property generically. Lists are
    /// edited through [`Tree::list_mut`] and cannot be assigned wholesale.
    pub fn set_structural_property(
        &mut self,
        db: &'db dyn salsa::Database,
        node: NodeId,
        property: &'static PropertyDescriptor,
        value: PropertyValue<'db>,
    ) -> Result<()> {
        self.check_property(node, property)?;
        match (property.kind(), value) {
            (PropertyKind::List(_), _) => Err(rejected(self.unsupported(
                node,
                property,
                Unsupported::ListAssignment,
            ))),
            (PropertyKind::Scalar(_), PropertyValue::Scalar(value)) => {
                self.set_scalar(db, node, property, value)
            }
            (PropertyKind::Child(_), PropertyValue::Child(Some(child))) => {
                self.set_child(node, property, child)
            }
            (PropertyKind::Child(_), PropertyValue::Child(None)) => {
                self.clear_child(node, property).map(drop)
            }
            (PropertyKind::Scalar(_), _) => Err(rejected(InvalidArgument::PropertyKind {
                property: property.name(),
                expected: "scalar",
            })),
            (PropertyKind::Child(_), _) => Err(rejected(InvalidArgument::PropertyKind {
                property: property.name(),
                expected: "single-child",
            })),
        }
    }

    /// `property` must be declared by the node's kind and reachable from the
    /// tree's shape variant.
    pub(crate) fn check_property(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<()> {
        self.check_owned(node)?;
        let kind = self.kind(node);
        if property.owner() != kind {
            return Err(rejected(InvalidArgument::NotAProperty { kind, property: property.name() }));
        }
        if !kind.info().slot_is_live(self.shape(), property.slot()) {
            return Err(rejected(self.unsupported(
                node,
                property,
                Unsupported::NotInShape(self.shape()),
            )));
        }
        Ok(())
    }

    pub(crate) fn check_modifiable(&self, node: NodeId) -> Result<()> {
        if self.flags(node).contains(NodeFlags::PROTECT) {
            return Err(rejected(InvalidArgument::Protected));
        }
        Ok(())
    }

    /// Ownership, type and cycle checks for attaching `child` under `node`.
    pub(crate) fn check_attachable(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        ty: ChildType,
        child: NodeId,
    ) -> Result<()> {
        self.check_owned(child)?;
        let data = self.data(child);
        if !data.kind.conforms_to(ty) {
            return Err(rejected(InvalidArgument::TypeMismatch { expected: ty, found: data.kind }));
        }
        if data.flags.contains(NodeFlags::PROTECT) {
            return Err(rejected(InvalidArgument::Protected));
        }
        if data.location.is_some() {
            return Err(rejected(InvalidArgument::AlreadyParented));
        }
        if property.cycle_risk() && self.ancestors(node).any(|ancestor| ancestor == child) {
            return Err(rejected(InvalidArgument::Cycle));
        }
        Ok(())
    }

    pub(crate) fn unsupported(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        reason: Unsupported,
    ) -> TreeError {
        TreeError::UnsupportedOperation { kind: self.kind(node), property: property.name(), reason }
    }

    /// Records `node` as the parent of `child`, filed under the primary
    /// descriptor of the slot.
    pub(crate) fn link(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        child: RawIdx,
    ) {
        let property = property.owner().storage()[property.slot()];
        self.raw_data_mut(child).location = Some(Location { parent: node.raw(), property });
    }

    #[track_caller]
    pub(crate) fn list_items(&self, node: RawIdx, slot: usize) -> &[RawIdx] {
        match &self.raw_data(node).slots[slot] {
            Slot::List(items) => items,
            _ => unreachable!("slot {slot} is not a list"),
        }
    }

    #[track_caller]
    pub(crate) fn list_items_mut(&mut self, node: RawIdx, slot: usize) -> &mut Vec<RawIdx> {
        match &mut self.raw_data_mut(node).slots[slot] {
            Slot::List(items) => items,
            _ => unreachable!("slot {slot} is not a list"),
        }
    }

    fn expect_child_property(&self, property: &'static PropertyDescriptor) -> Result<ChildType> {
        match property.kind() {
            PropertyKind::Child(ty) => Ok(ty),
            _ => Err(rejected(InvalidArgument::PropertyKind {
                property: property.name(),
                expected: "single-child",
            })),
        }
    }

    fn current_child(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Result<Option<RawIdx>> {
        match (&self.data(node).slots[property.slot()], property.view()) {
            (Slot::Child(child), View::Direct) => Ok(*child),
            (Slot::List(items), View::SoleElement) => match items.as_slice() {
                [] => Ok(None),
                [element] => Ok(Some(*element)),
                items => Err(rejected(self.unsupported(
                    node,
                    property,
                    Unsupported::MultipleElements(items.len()),
                ))),
            },
            _ => unreachable!("{property:?} does not match its storage slot"),
        }
    }

    fn unset_single(&mut self, node: NodeId, property: &'static PropertyDescriptor, old: NodeId) {
        let event = TreeEvent::ReplaceChild { node, property, old: Some(old), new: None };
        self.notify_pre(&event);
        self.data_mut(old).location = None;
        self.data_mut(node).slots[property.slot()] = Slot::Child(None);
        self.modified();
        self.notify_post(&event);

        tracing::trace!(?node, property = property.name(), child = ?old, "child detached");
    }
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;
    use trellis_span::Symbol;

    use crate::error::{InvalidArgument, TreeError, Unsupported};
    use crate::shapes::{
        array_access, cast_expression, pattern, prefix_expression, qualified_type, simple_name,
    };
    use crate::{
        NodeFlags, NodeKind, PrefixOperator, PrimitiveTypeCode, PropertyValue, Scalar,
        ShapeVariant, Tree, TreeConfig,
    };

    fn legacy(db: &DatabaseImpl) -> Tree<'_> {
        Tree::new(db, TreeConfig::new().with_shape(ShapeVariant::Legacy))
    }

    #[test]
    fn placeholder_is_materialized_once() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);

        assert_eq!(tree.peek_child(access, &array_access::ARRAY), Ok(None));
        let first = tree.child(access, &array_access::ARRAY).unwrap().unwrap();
        let second = tree.child(access, &array_access::ARRAY).unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(tree.kind(first), NodeKind::SimpleName);
        assert_eq!(tree.parent(first), Some(access));
        assert_eq!(tree.modification_stamp(), 0);
    }

    #[test]
    fn set_then_get_returns_the_child() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        let name = tree.new_node(NodeKind::SimpleName);

        tree.set_child(access, &array_access::ARRAY, name).unwrap();

        assert_eq!(tree.child(access, &array_access::ARRAY), Ok(Some(name)));
        assert_eq!(tree.location_in_parent(name), Some(&array_access::ARRAY));
        assert_eq!(tree.modification_stamp(), 1);
    }

    #[test]
    fn replacing_detaches_the_previous_child() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        let first = tree.new_node(NodeKind::SimpleName);
        let second = tree.new_node(NodeKind::NumberLiteral);

        tree.set_child(access, &array_access::ARRAY, first).unwrap();
        tree.set_child(access, &array_access::ARRAY, second).unwrap();

        assert_eq!(tree.parent(first), None);
        assert_eq!(tree.parent(second), Some(access));
    }

    #[test]
    fn rejects_already_parented_child() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let first = tree.new_node(NodeKind::ArrayAccess);
        let second = tree.new_node(NodeKind::ArrayAccess);
        let name = tree.new_node(NodeKind::SimpleName);
        tree.set_child(first, &array_access::ARRAY, name).unwrap();
        let stamp = tree.modification_stamp();

        let error = tree.set_child(second, &array_access::ARRAY, name).unwrap_err();

        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::AlreadyParented));
        assert_eq!(tree.parent(name), Some(first));
        assert_eq!(tree.peek_child(second, &array_access::ARRAY), Ok(None));
        assert_eq!(tree.modification_stamp(), stamp);
    }

    #[test]
    fn rejects_foreign_child() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let mut other = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        let name = other.new_node(NodeKind::SimpleName);

        let error = tree.set_child(access, &array_access::ARRAY, name).unwrap_err();

        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::ForeignTree));
        assert_eq!(tree.modification_stamp(), 0);
    }

    #[test]
    fn rejects_cycles() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let outer = tree.new_node(NodeKind::ArrayAccess);
        let inner = tree.new_node(NodeKind::ArrayAccess);
        tree.set_child(outer, &array_access::ARRAY, inner).unwrap();

        let error = tree.set_child(inner, &array_access::ARRAY, outer).unwrap_err();
        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::Cycle));

        let error = tree.set_child(outer, &array_access::ARRAY, outer).unwrap_err();
        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::Cycle));
        assert_eq!(tree.parent(inner), Some(outer));
        assert_eq!(tree.modification_stamp(), 1);
    }

    #[test]
    fn rejects_kind_that_does_not_conform() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        let ty = tree.new_node(NodeKind::SimpleType);

        let error = tree.set_child(access, &array_access::ARRAY, ty).unwrap_err();

        assert!(matches!(
            error,
            TreeError::InvalidArgument(InvalidArgument::TypeMismatch {
                found: NodeKind::SimpleType,
                ..
            })
        ));
    }

    #[test]
    fn protected_nodes_reject_edits() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        let name = tree.new_node(NodeKind::SimpleName);
        tree.set_flags(access, NodeFlags::PROTECT).unwrap();

        let error = tree.set_child(access, &array_access::ARRAY, name).unwrap_err();
        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::Protected));

        tree.set_flags(access, NodeFlags::EMPTY).unwrap();
        tree.set_child(access, &array_access::ARRAY, name).unwrap();
    }

    #[test]
    fn detach_leaves_mandatory_slot_unset() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        let name = tree.new_node(NodeKind::SimpleName);
        tree.set_child(access, &array_access::ARRAY, name).unwrap();

        tree.detach(name).unwrap();

        assert_eq!(tree.parent(name), None);
        assert_eq!(tree.peek_child(access, &array_access::ARRAY), Ok(None));
        let placeholder = tree.child(access, &array_access::ARRAY).unwrap().unwrap();
        assert_ne!(placeholder, name);
        assert_eq!(tree.modification_stamp(), 2);
    }

    #[test]
    fn optional_child_can_be_cleared() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let pattern = tree.new_node(NodeKind::Pattern);
        let name = tree.new_node(NodeKind::SimpleName);

        assert_eq!(tree.child(pattern, &pattern::BINDING), Ok(None));
        tree.set_child(pattern, &pattern::BINDING, name).unwrap();
        assert_eq!(tree.clear_child(pattern, &pattern::BINDING), Ok(Some(name)));
        assert_eq!(tree.parent(name), None);

        assert_eq!(tree.clear_child(pattern, &pattern::BINDING), Ok(None));
    }

    #[test]
    fn mandatory_child_cannot_be_cleared() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);

        let error = tree
            .set_structural_property(&db, access, &array_access::ARRAY, PropertyValue::Child(None))
            .unwrap_err();

        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::MandatoryProperty("array")));
    }

    #[test]
    fn scalars_default_and_update() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let name = tree.new_node(NodeKind::SimpleName);
        let prefix = tree.new_node(NodeKind::PrefixExpression);

        let identifier = tree.scalar(name, &simple_name::IDENTIFIER).unwrap();
        assert_eq!(identifier.as_symbol().unwrap().text(&db), "MISSING");

        tree.set_scalar(&db, name, &simple_name::IDENTIFIER, Symbol::new(&db, "count")).unwrap();
        tree.set_scalar(&db, prefix, &prefix_expression::OPERATOR, PrefixOperator::Not).unwrap();

        assert_eq!(
            tree.scalar(name, &simple_name::IDENTIFIER),
            Ok(Scalar::Symbol(Symbol::new(&db, "count")))
        );
        assert_eq!(
            tree.scalar(prefix, &prefix_expression::OPERATOR),
            Ok(Scalar::PrefixOperator(PrefixOperator::Not))
        );
    }

    #[test]
    fn scalar_rejections() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let name = tree.new_node(NodeKind::SimpleName);

        let error =
            tree.set_scalar(&db, name, &simple_name::IDENTIFIER, Symbol::new(&db, "")).unwrap_err();
        assert_eq!(error, TreeError::InvalidArgument(InvalidArgument::EmptyValue("identifier")));

        let error =
            tree.set_scalar(&db, name, &simple_name::IDENTIFIER, PrimitiveTypeCode::Long)
                .unwrap_err();
        assert!(matches!(
            error,
            TreeError::InvalidArgument(InvalidArgument::ScalarMismatch { .. })
        ));
        assert_eq!(tree.modification_stamp(), 0);
    }

    #[test]
    fn property_of_another_kind_is_rejected() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);

        let error = tree.child(access, &cast_expression::EXPRESSION).unwrap_err();

        assert_eq!(
            error,
            TreeError::InvalidArgument(InvalidArgument::NotAProperty {
                kind: NodeKind::ArrayAccess,
                property: "expression",
            })
        );
    }

    #[test]
    fn sole_element_view_reads_and_writes_the_list() {
        let db = DatabaseImpl::new();
        let mut tree = legacy(&db);
        let access = tree.new_node(NodeKind::ArrayAccess);

        let placeholder = tree.child(access, &array_access::INDEX).unwrap().unwrap();
        assert_eq!(tree.list(access, &array_access::INDEXES).unwrap().to_vec(), vec![placeholder]);

        let literal = tree.new_node(NodeKind::NumberLiteral);
        tree.set_child(access, &array_access::INDEX, literal).unwrap();
        assert_eq!(tree.list(access, &array_access::INDEXES).unwrap().to_vec(), vec![literal]);
        assert_eq!(tree.parent(placeholder), None);
        assert_eq!(tree.location_in_parent(literal), Some(&array_access::INDEX));
    }

    #[test]
    fn sole_element_view_rejects_longer_lists() {
        let db = DatabaseImpl::new();
        let mut tree = legacy(&db);
        let access = tree.new_node(NodeKind::ArrayAccess);
        let first = tree.new_node(NodeKind::SimpleName);
        let second = tree.new_node(NodeKind::SimpleName);
        tree.list_mut(access, &array_access::INDEXES).unwrap().extend([first, second]).unwrap();

        let error = tree.child(access, &array_access::INDEX).unwrap_err();
        assert_eq!(
            error,
            TreeError::UnsupportedOperation {
                kind: NodeKind::ArrayAccess,
                property: "index",
                reason: Unsupported::MultipleElements(2),
            }
        );

        let third = tree.new_node(NodeKind::SimpleName);
        assert!(tree.set_child(access, &array_access::INDEX, third).is_err());
        assert_eq!(tree.parent(third), None);
    }

    #[test]
    fn property_missing_from_shape_is_unsupported() {
        let db = DatabaseImpl::new();
        let mut tree = legacy(&db);
        let ty = tree.new_node(NodeKind::QualifiedType);

        let error = tree.list(ty, &qualified_type::ANNOTATIONS).unwrap_err();

        assert_eq!(
            error,
            TreeError::UnsupportedOperation {
                kind: NodeKind::QualifiedType,
                property: "annotations",
                reason: Unsupported::NotInShape(ShapeVariant::Legacy),
            }
        );
    }

    #[test]
    fn reflection_round_trip() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let cast = tree.new_node(NodeKind::CastExpression);
        let operand = tree.new_node(NodeKind::SimpleName);

        for property in NodeKind::CastExpression.structural_properties(tree.shape()) {
            match tree.structural_property(cast, property).unwrap() {
                PropertyValue::List(items) => assert!(items.is_empty()),
                PropertyValue::Child(child) => assert!(child.is_some()),
                PropertyValue::Scalar(_) => unreachable!(),
            }
        }

        tree.set_structural_property(
            &db,
            cast,
            &cast_expression::EXPRESSION,
            PropertyValue::Child(Some(operand)),
        )
        .unwrap();
        assert_eq!(
            tree.structural_property(cast, &cast_expression::EXPRESSION),
            Ok(PropertyValue::Child(Some(operand)))
        );

        let error = tree
            .set_structural_property(
                &db,
                cast,
                &cast_expression::TYPES,
                PropertyValue::List(vec![]),
            )
            .unwrap_err();
        assert!(matches!(
            error,
            TreeError::UnsupportedOperation { reason: Unsupported::ListAssignment, .. }
        ));
    }
}
