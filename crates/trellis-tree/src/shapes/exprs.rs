pub mod array_access {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind};

    pub static ARRAY: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::ArrayAccess,
        "array",
        0,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub static INDEXES: PropertyDescriptor =
        PropertyDescriptor::list(NodeKind::ArrayAccess, "indexes", 1, ChildType::Expression);

    pub static INDEX: PropertyDescriptor = PropertyDescriptor::sole_element(
        NodeKind::ArrayAccess,
        "index",
        1,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "ArrayAccess",
        base_size: BASE_NODE_SIZE + 2 * 4,
        storage: &[&ARRAY, &INDEXES],
        shapes: [&[&ARRAY, &INDEX], &[&ARRAY, &INDEXES]],
    };
}

pub mod cast_expression {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind};

    pub static TYPES: PropertyDescriptor =
        PropertyDescriptor::list(NodeKind::CastExpression, "types", 0, ChildType::Type);

    pub static TYPE: PropertyDescriptor = PropertyDescriptor::sole_element(
        NodeKind::CastExpression,
        "type",
        0,
        ChildType::Type,
        NodeKind::PrimitiveType,
    );

    pub static EXPRESSION: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::CastExpression,
        "expression",
        1,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "CastExpression",
        base_size: BASE_NODE_SIZE + 2 * 4,
        storage: &[&TYPES, &EXPRESSION],
        shapes: [&[&TYPE, &EXPRESSION], &[&TYPES, &EXPRESSION]],
    };
}

/// `condition ? then : else`, each branch stored as an ordered list.
pub mod conditional_expression {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind};

    pub static CONDITION_ELEMENTS: PropertyDescriptor = PropertyDescriptor::list(
        NodeKind::ConditionalExpression,
        "conditionElements",
        0,
        ChildType::Expression,
    );

    pub static THEN_ELEMENTS: PropertyDescriptor = PropertyDescriptor::list(
        NodeKind::ConditionalExpression,
        "thenElements",
        1,
        ChildType::Expression,
    );

    pub static ELSE_ELEMENTS: PropertyDescriptor = PropertyDescriptor::list(
        NodeKind::ConditionalExpression,
        "elseElements",
        2,
        ChildType::Expression,
    );

    pub static EXPRESSION: PropertyDescriptor = PropertyDescriptor::sole_element(
        NodeKind::ConditionalExpression,
        "expression",
        0,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub static THEN_EXPRESSION: PropertyDescriptor = PropertyDescriptor::sole_element(
        NodeKind::ConditionalExpression,
        "thenExpression",
        1,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub static ELSE_EXPRESSION: PropertyDescriptor = PropertyDescriptor::sole_element(
        NodeKind::ConditionalExpression,
        "elseExpression",
        2,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "ConditionalExpression",
        base_size: BASE_NODE_SIZE + 3 * 4,
        storage: &[&CONDITION_ELEMENTS, &THEN_ELEMENTS, &ELSE_ELEMENTS],
        shapes: [
            &[&EXPRESSION, &THEN_EXPRESSION, &ELSE_EXPRESSION],
            &[&CONDITION_ELEMENTS, &THEN_ELEMENTS, &ELSE_ELEMENTS],
        ],
    };
}

pub mod prefix_expression {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind, ScalarType};

    pub static OPERATOR: PropertyDescriptor = PropertyDescriptor::scalar(
        NodeKind::PrefixExpression,
        "operator",
        0,
        ScalarType::PrefixOperator,
    );

    pub static OPERAND: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::PrefixExpression,
        "operand",
        1,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "PrefixExpression",
        base_size: BASE_NODE_SIZE + 2 * 4,
        storage: &[&OPERATOR, &OPERAND],
        shapes: [&[&OPERATOR, &OPERAND], &[&OPERATOR, &OPERAND]],
    };
}

pub mod postfix_expression {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind, ScalarType};

    pub static OPERAND: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::PostfixExpression,
        "operand",
        0,
        ChildType::Expression,
        NodeKind::SimpleName,
    );

    pub static OPERATOR: PropertyDescriptor = PropertyDescriptor::scalar(
        NodeKind::PostfixExpression,
        "operator",
        1,
        ScalarType::PostfixOperator,
    );

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "PostfixExpression",
        base_size: BASE_NODE_SIZE + 2 * 4,
        storage: &[&OPERAND, &OPERATOR],
        shapes: [&[&OPERAND, &OPERATOR], &[&OPERAND, &OPERATOR]],
    };
}

/// A sequence of pattern elements with an optional binding name.
pub mod pattern {
    use crate::kind::KindInfo;
    use crate::property::PropertyDescriptor;
    use crate::size::BASE_NODE_SIZE;
    use crate::{ChildType, NodeKind};

    pub static ELEMENTS: PropertyDescriptor =
        PropertyDescriptor::list(NodeKind::Pattern, "elements", 0, ChildType::Any);

    pub static BINDING: PropertyDescriptor =
        PropertyDescriptor::optional_child(NodeKind::Pattern, "binding", 1, ChildType::Name);

    pub(crate) static KIND: KindInfo = KindInfo {
        name: "Pattern",
        base_size: BASE_NODE_SIZE + 2 * 4,
        storage: &[&ELEMENTS, &BINDING],
        shapes: [&[&ELEMENTS, &BINDING], &[&ELEMENTS, &BINDING]],
    };
}
