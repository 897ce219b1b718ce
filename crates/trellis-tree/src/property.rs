use std::{fmt, hash, ptr};

use crate::{ChildType, NodeKind, ScalarType};

/// Kind of a structural property and the value type it declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Scalar(ScalarType),
    Child(ChildType),
    List(ChildType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Mandatory,
    Optional,
}

/// How a descriptor reaches its storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Direct,
    /// Single-child accessor over the sole element of a list slot.
    SoleElement,
}

/// Immutable description of one structural property.
///
/// Descriptors are statics and compare by address: two descriptors are the
/// same property only if they are the same static.
pub struct PropertyDescriptor {
    owner: NodeKind,
    name: &'static str,
    kind: PropertyKind,
    cardinality: Cardinality,
    cycle_risk: bool,
    slot: u8,
    view: View,
    placeholder: Option<NodeKind>,
}

impl PropertyDescriptor {
    /// Mandatory scalar, populated with its type's default at creation.
    pub(crate) const fn scalar(
        owner: NodeKind,
        name: &'static str,
        slot: u8,
        ty: ScalarType,
    ) -> Self {
        Self {
            owner,
            name,
            kind: PropertyKind::Scalar(ty),
            cardinality: Cardinality::Mandatory,
            cycle_risk: false,
            slot,
            view: View::Direct,
            placeholder: None,
        }
    }

    /// Mandatory child; `placeholder` is materialized on the first read of an
    /// unset slot.
    pub(crate) const fn child(
        owner: NodeKind,
        name: &'static str,
        slot: u8,
        ty: ChildType,
        placeholder: NodeKind,
    ) -> Self {
        Self {
            owner,
            name,
            kind: PropertyKind::Child(ty),
            cardinality: Cardinality::Mandatory,
            cycle_risk: ty.admits_branches(),
            slot,
            view: View::Direct,
            placeholder: Some(placeholder),
        }
    }

    pub(crate) const fn optional_child(
        owner: NodeKind,
        name: &'static str,
        slot: u8,
        ty: ChildType,
    ) -> Self {
        Self {
            owner,
            name,
            kind: PropertyKind::Child(ty),
            cardinality: Cardinality::Optional,
            cycle_risk: ty.admits_branches(),
            slot,
            view: View::Direct,
            placeholder: None,
        }
    }

    pub(crate) const fn list(owner: NodeKind, name: &'static str, slot: u8, ty: ChildType) -> Self {
        Self {
            owner,
            name,
            kind: PropertyKind::List(ty),
            cardinality: Cardinality::Optional,
            cycle_risk: ty.admits_branches(),
            slot,
            view: View::Direct,
            placeholder: None,
        }
    }

    /// Mandatory single-child view over the list stored in `slot`.
    pub(crate) const fn sole_element(
        owner: NodeKind,
        name: &'static str,
        slot: u8,
        ty: ChildType,
        placeholder: NodeKind,
    ) -> Self {
        Self {
            owner,
            name,
            kind: PropertyKind::Child(ty),
            cardinality: Cardinality::Mandatory,
            cycle_risk: ty.admits_branches(),
            slot,
            view: View::SoleElement,
            placeholder: Some(placeholder),
        }
    }

    pub fn owner(&self) -> NodeKind {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn is_mandatory(&self) -> bool {
        self.cardinality == Cardinality::Mandatory
    }

    /// Whether assigning through this property can make a node its own
    /// ancestor, and therefore needs the ancestor walk.
    pub fn cycle_risk(&self) -> bool {
        self.cycle_risk
    }

    /// Kind synthesized when an unset mandatory child is read.
    pub fn placeholder(&self) -> Option<NodeKind> {
        self.placeholder
    }

    /// Whether this descriptor is a single-value view over a list slot.
    pub fn is_sole_element_view(&self) -> bool {
        self.view == View::SoleElement
    }

    pub(crate) fn slot(&self) -> usize {
        usize::from(self.slot)
    }

    pub(crate) fn view(&self) -> View {
        self.view
    }
}

impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for PropertyDescriptor {}

impl hash::Hash for PropertyDescriptor {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        ptr::hash(self, state);
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}.{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use crate::shapes::{array_access, cast_expression};
    use crate::{ChildType, NodeKind, PropertyKind, ShapeVariant};

    #[test]
    fn descriptors_compare_by_identity() {
        assert_eq!(&array_access::ARRAY, &array_access::ARRAY);
        assert_ne!(&array_access::ARRAY, &cast_expression::EXPRESSION);
        assert_eq!(format!("{:?}", array_access::INDEX), "ArrayAccess.index");
    }

    #[test]
    fn sole_element_view_shares_the_list_slot() {
        let index = &array_access::INDEX;
        let indexes = &array_access::INDEXES;
        assert!(index.is_sole_element_view());
        assert_eq!(index.kind(), PropertyKind::Child(ChildType::Expression));
        assert_eq!(indexes.kind(), PropertyKind::List(ChildType::Expression));
        assert_eq!(index.slot(), indexes.slot());

        let legacy = NodeKind::ArrayAccess.structural_properties(ShapeVariant::Legacy);
        assert!(legacy.contains(&index));
        assert!(!legacy.contains(&indexes));
    }
}
