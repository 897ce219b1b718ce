//! Descriptor tables of every node kind.
//!
//! Each kind lists its storage slots once and, per shape variant, the
//! descriptors that are live. Sole-element views share the slot of the list
//! they expose, so both accessor families always agree.

mod exprs;
mod leaves;
mod types;

pub use exprs::{
    array_access, cast_expression, conditional_expression, pattern, postfix_expression,
    prefix_expression,
};
pub use leaves::{number_literal, operator, primitive_type, simple_name};
pub use types::{qualified_type, simple_type};

use crate::NodeKind;
use crate::kind::KindInfo;

pub(crate) fn info(kind: NodeKind) -> &'static KindInfo {
    match kind {
        NodeKind::SimpleName => &simple_name::KIND,
        NodeKind::NumberLiteral => &number_literal::KIND,
        NodeKind::Operator => &operator::KIND,
        NodeKind::PrimitiveType => &primitive_type::KIND,
        NodeKind::SimpleType => &simple_type::KIND,
        NodeKind::QualifiedType => &qualified_type::KIND,
        NodeKind::ArrayAccess => &array_access::KIND,
        NodeKind::CastExpression => &cast_expression::KIND,
        NodeKind::ConditionalExpression => &conditional_expression::KIND,
        NodeKind::PrefixExpression => &prefix_expression::KIND,
        NodeKind::PostfixExpression => &postfix_expression::KIND,
        NodeKind::Pattern => &pattern::KIND,
    }
}
