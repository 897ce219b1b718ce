pub mod simple_name {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{NodeKind, ScalarType};

    pub static IDENTIFIER: PropertyDescriptor =
        PropertyDescriptor::scalar(NodeKind::SimpleName, "identifier", 0, ScalarType::Identifier);

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "SimpleName",
        base_size: BASE_NODE_SIZE + 2 * 4,
        storage: &[&IDENTIFIER],
        shapes: [&[&IDENTIFIER], &[&IDENTIFIER]],
    };
}

pub mod number_literal {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{NodeKind, ScalarType};

    pub static TOKEN: PropertyDescriptor =
        PropertyDescriptor::scalar(NodeKind::NumberLiteral, "token", 0, ScalarType::Number);

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "NumberLiteral",
        base_size: BASE_NODE_SIZE + 4,
        storage: &[&TOKEN],
        shapes: [&[&TOKEN], &[&TOKEN]],
    };
}

pub mod operator {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{NodeKind, ScalarType};

    pub static OPERATOR: PropertyDescriptor =
        PropertyDescriptor::scalar(NodeKind::Operator, "operator", 0, ScalarType::OperatorToken);

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "Operator",
        base_size: BASE_NODE_SIZE + 4,
        storage: &[&OPERATOR],
        shapes: [&[&OPERATOR], &[&OPERATOR]],
    };
}

pub mod primitive_type {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{NodeKind, ScalarType};

    pub static CODE: PropertyDescriptor =
        PropertyDescriptor::scalar(NodeKind::PrimitiveType, "code", 0, ScalarType::PrimitiveType);

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "PrimitiveType",
        base_size: BASE_NODE_SIZE + 4,
        storage: &[&CODE],
        shapes: [&[&CODE], &[&CODE]],
    };
}
