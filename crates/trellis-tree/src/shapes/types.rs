pub mod simple_type {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind};

    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::SimpleType,
        "name",
        0,
        ChildType::Name,
        NodeKind::SimpleName,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "SimpleType",
        base_size: BASE_NODE_SIZE + 4,
        storage: &[&NAME],
        shapes: [&[&NAME], &[&NAME]],
    };
}

/// `qualifier.name`, where the current shape spells the qualifier as a list
/// of elements and allows annotations before the name.
pub mod qualified_type {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind};

    pub static ELEMENTS: PropertyDescriptor =
        PropertyDescriptor::list(NodeKind::QualifiedType, "elements", 0, ChildType::Any);

    pub static ANNOTATIONS: PropertyDescriptor =
        PropertyDescriptor::list(NodeKind::QualifiedType, "annotations", 1, ChildType::Name);

    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::QualifiedType,
        "name",
        2,
        ChildType::Name,
        NodeKind::SimpleName,
    );

    /// Legacy view of `elements`.
    pub static QUALIFIER: PropertyDescriptor = PropertyDescriptor::sole_element(
        NodeKind::QualifiedType,
        "qualifier",
        0,
        ChildType::Type,
        NodeKind::SimpleType,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "QualifiedType",
        base_size: BASE_NODE_SIZE + 3 * 4,
        storage: &[&ELEMENTS, &ANNOTATIONS, &NAME],
        shapes: [&[&QUALIFIER, &NAME], &[&ELEMENTS, &ANNOTATIONS, &NAME]],
    };
}
