use salsa::Database;
use trellis_span::IntoSymbol;

use crate::error::{InvalidArgument, Result, rejected};
use crate::property::{PropertyDescriptor, PropertyKind};
use crate::shapes::{
    array_access, cast_expression, conditional_expression, number_literal, operator, pattern,
    postfix_expression, prefix_expression, primitive_type, qualified_type, simple_name,
    simple_type,
};
use crate::{
    NodeId, NodeKind, NodeList, NodeListMut, PostfixOperator, PrefixOperator, PrimitiveTypeCode,
    Scalar, Tree,
};

pub trait Node: Copy {
    fn cast(tree: &Tree<'_>, node: NodeId) -> Option<Self>;

    fn syntax(self) -> NodeId;
}

macro_rules! nodes {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(NodeId);

        impl $name {
            /// Creates a detached node of this kind.
            pub fn new(tree: &mut Tree<'_>) -> Self {
                Self(tree.new_node(NodeKind::$name))
            }
        }

        impl Node for $name {
            fn cast(tree: &Tree<'_>, node: NodeId) -> Option<Self> {
                (tree.kind(node) == NodeKind::$name).then_some(Self(node))
            }

            fn syntax(self) -> NodeId {
                self.0
            }
        }
    )+};
}

nodes! {
    SimpleName,
    NumberLiteral,
    Operator,
    PrimitiveType,
    SimpleType,
    QualifiedType,
    ArrayAccess,
    CastExpression,
    ConditionalExpression,
    PrefixExpression,
    PostfixExpression,
    Pattern,
}

fn required(
    tree: &mut Tree<'_>,
    node: NodeId,
    property: &'static PropertyDescriptor,
) -> Result<NodeId> {
    match tree.child(node, property)? {
        Some(child) => Ok(child),
        None => unreachable!("{property:?} is mandatory and materializes a placeholder"),
    }
}

fn scalar_as<'db, T>(
    tree: &Tree<'db>,
    node: NodeId,
    property: &'static PropertyDescriptor,
    project: impl FnOnce(Scalar<'db>) -> Option<T>,
) -> Result<T> {
    let value = tree.scalar(node, property)?;
    match (project(value), property.kind()) {
        (Some(value), _) => Ok(value),
        (None, PropertyKind::Scalar(expected)) => {
            Err(rejected(InvalidArgument::ScalarMismatch { property: property.name(), expected }))
        }
        (None, _) => unreachable!("{property:?} is not a scalar property"),
    }
}

fn text<'db>(
    tree: &Tree<'db>,
    db: &'db dyn Database,
    node: NodeId,
    property: &'static PropertyDescriptor,
) -> Result<&'db str> {
    scalar_as(tree, node, property, Scalar::as_symbol).map(|symbol| symbol.text(db))
}

impl SimpleName {
    pub fn with_identifier<'db>(
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        identifier: impl IntoSymbol<'db>,
    ) -> Result<Self> {
        let name = Self::new(tree);
        name.set_identifier(tree, db, identifier)?;
        Ok(name)
    }

    pub fn identifier<'db>(self, tree: &Tree<'db>, db: &'db dyn Database) -> Result<&'db str> {
        text(tree, db, self.0, &simple_name::IDENTIFIER)
    }

    pub fn set_identifier<'db>(
        self,
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        identifier: impl IntoSymbol<'db>,
    ) -> Result<()> {
        tree.set_scalar(db, self.0, &simple_name::IDENTIFIER, identifier.into_symbol(db))
    }
}

impl NumberLiteral {
    pub fn with_token<'db>(
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        token: impl IntoSymbol<'db>,
    ) -> Result<Self> {
        let literal = Self::new(tree);
        literal.set_token(tree, db, token)?;
        Ok(literal)
    }

    pub fn token<'db>(self, tree: &Tree<'db>, db: &'db dyn Database) -> Result<&'db str> {
        text(tree, db, self.0, &number_literal::TOKEN)
    }

    pub fn set_token<'db>(
        self,
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        token: impl IntoSymbol<'db>,
    ) -> Result<()> {
        tree.set_scalar(db, self.0, &number_literal::TOKEN, token.into_symbol(db))
    }
}

impl Operator {
    pub fn operator<'db>(self, tree: &Tree<'db>, db: &'db dyn Database) -> Result<&'db str> {
        text(tree, db, self.0, &operator::OPERATOR)
    }

    pub fn set_operator<'db>(
        self,
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        token: impl IntoSymbol<'db>,
    ) -> Result<()> {
        tree.set_scalar(db, self.0, &operator::OPERATOR, token.into_symbol(db))
    }
}

impl PrimitiveType {
    pub fn with_code<'db>(
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        code: PrimitiveTypeCode,
    ) -> Result<Self> {
        let ty = Self::new(tree);
        ty.set_code(tree, db, code)?;
        Ok(ty)
    }

    pub fn code(self, tree: &Tree<'_>) -> Result<PrimitiveTypeCode> {
        scalar_as(tree, self.0, &primitive_type::CODE, |value| match value {
            Scalar::PrimitiveType(code) => Some(code),
            _ => None,
        })
    }

    pub fn set_code<'db>(
        self,
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        code: PrimitiveTypeCode,
    ) -> Result<()> {
        tree.set_scalar(db, self.0, &primitive_type::CODE, code)
    }
}

impl SimpleType {
    pub fn name(self, tree: &mut Tree<'_>) -> Result<SimpleName> {
        required(tree, self.0, &simple_type::NAME).map(SimpleName)
    }

    pub fn set_name(self, tree: &mut Tree<'_>, name: SimpleName) -> Result<()> {
        tree.set_child(self.0, &simple_type::NAME, name.0)
    }
}

impl QualifiedType {
    /// Sole element of `elements`; only part of the legacy shape.
    pub fn qualifier(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &qualified_type::QUALIFIER)
    }

    pub fn set_qualifier(self, tree: &mut Tree<'_>, qualifier: NodeId) -> Result<()> {
        tree.set_child(self.0, &qualified_type::QUALIFIER, qualifier)
    }

    pub fn elements<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &qualified_type::ELEMENTS)
    }

    pub fn elements_mut<'t, 'db>(self, tree: &'t mut Tree<'db>) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &qualified_type::ELEMENTS)
    }

    pub fn annotations<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &qualified_type::ANNOTATIONS)
    }

    pub fn annotations_mut<'t, 'db>(self, tree: &'t mut Tree<'db>) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &qualified_type::ANNOTATIONS)
    }

    pub fn name(self, tree: &mut Tree<'_>) -> Result<SimpleName> {
        required(tree, self.0, &qualified_type::NAME).map(SimpleName)
    }

    pub fn set_name(self, tree: &mut Tree<'_>, name: SimpleName) -> Result<()> {
        tree.set_child(self.0, &qualified_type::NAME, name.0)
    }
}

impl ArrayAccess {
    pub fn array(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &array_access::ARRAY)
    }

    pub fn set_array(self, tree: &mut Tree<'_>, array: NodeId) -> Result<()> {
        tree.set_child(self.0, &array_access::ARRAY, array)
    }

    /// Sole element of `indexes`.
    pub fn index(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &array_access::INDEX)
    }

    pub fn set_index(self, tree: &mut Tree<'_>, index: NodeId) -> Result<()> {
        tree.set_child(self.0, &array_access::INDEX, index)
    }

    pub fn indexes<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &array_access::INDEXES)
    }

    pub fn indexes_mut<'t, 'db>(self, tree: &'t mut Tree<'db>) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &array_access::INDEXES)
    }
}

impl CastExpression {
    /// Sole element of `types`.
    pub fn ty(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &cast_expression::TYPE)
    }

    pub fn set_ty(self, tree: &mut Tree<'_>, ty: NodeId) -> Result<()> {
        tree.set_child(self.0, &cast_expression::TYPE, ty)
    }

    pub fn types<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &cast_expression::TYPES)
    }

    pub fn types_mut<'t, 'db>(self, tree: &'t mut Tree<'db>) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &cast_expression::TYPES)
    }

    pub fn expression(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &cast_expression::EXPRESSION)
    }

    pub fn set_expression(self, tree: &mut Tree<'_>, expression: NodeId) -> Result<()> {
        tree.set_child(self.0, &cast_expression::EXPRESSION, expression)
    }
}

impl ConditionalExpression {
    pub fn expression(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &conditional_expression::EXPRESSION)
    }

    pub fn set_expression(self, tree: &mut Tree<'_>, expression: NodeId) -> Result<()> {
        tree.set_child(self.0, &conditional_expression::EXPRESSION, expression)
    }

    pub fn then_expression(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &conditional_expression::THEN_EXPRESSION)
    }

    pub fn set_then_expression(self, tree: &mut Tree<'_>, expression: NodeId) -> Result<()> {
        tree.set_child(self.0, &conditional_expression::THEN_EXPRESSION, expression)
    }

    pub fn else_expression(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &conditional_expression::ELSE_EXPRESSION)
    }

    pub fn set_else_expression(self, tree: &mut Tree<'_>, expression: NodeId) -> Result<()> {
        tree.set_child(self.0, &conditional_expression::ELSE_EXPRESSION, expression)
    }

    pub fn condition_elements<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &conditional_expression::CONDITION_ELEMENTS)
    }

    pub fn condition_elements_mut<'t, 'db>(
        self,
        tree: &'t mut Tree<'db>,
    ) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &conditional_expression::CONDITION_ELEMENTS)
    }

    pub fn then_elements<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &conditional_expression::THEN_ELEMENTS)
    }

    pub fn then_elements_mut<'t, 'db>(
        self,
        tree: &'t mut Tree<'db>,
    ) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &conditional_expression::THEN_ELEMENTS)
    }

    pub fn else_elements<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &conditional_expression::ELSE_ELEMENTS)
    }

    pub fn else_elements_mut<'t, 'db>(
        self,
        tree: &'t mut Tree<'db>,
    ) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &conditional_expression::ELSE_ELEMENTS)
    }
}

impl PrefixExpression {
    pub fn operator(self, tree: &Tree<'_>) -> Result<PrefixOperator> {
        scalar_as(tree, self.0, &prefix_expression::OPERATOR, |value| match value {
            Scalar::PrefixOperator(operator) => Some(operator),
            _ => None,
        })
    }

    pub fn set_operator<'db>(
        self,
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        operator: PrefixOperator,
    ) -> Result<()> {
        tree.set_scalar(db, self.0, &prefix_expression::OPERATOR, operator)
    }

    pub fn operand(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &prefix_expression::OPERAND)
    }

    pub fn set_operand(self, tree: &mut Tree<'_>, operand: NodeId) -> Result<()> {
        tree.set_child(self.0, &prefix_expression::OPERAND, operand)
    }
}

impl PostfixExpression {
    pub fn operator(self, tree: &Tree<'_>) -> Result<PostfixOperator> {
        scalar_as(tree, self.0, &postfix_expression::OPERATOR, |value| match value {
            Scalar::PostfixOperator(operator) => Some(operator),
            _ => None,
        })
    }

    pub fn set_operator<'db>(
        self,
        tree: &mut Tree<'db>,
        db: &'db dyn Database,
        operator: PostfixOperator,
    ) -> Result<()> {
        tree.set_scalar(db, self.0, &postfix_expression::OPERATOR, operator)
    }

    pub fn operand(self, tree: &mut Tree<'_>) -> Result<NodeId> {
        required(tree, self.0, &postfix_expression::OPERAND)
    }

    pub fn set_operand(self, tree: &mut Tree<'_>, operand: NodeId) -> Result<()> {
        tree.set_child(self.0, &postfix_expression::OPERAND, operand)
    }
}

impl Pattern {
    pub fn elements<'t, 'db>(self, tree: &'t Tree<'db>) -> Result<NodeList<'t, 'db>> {
        tree.list(self.0, &pattern::ELEMENTS)
    }

    pub fn elements_mut<'t, 'db>(self, tree: &'t mut Tree<'db>) -> Result<NodeListMut<'t, 'db>> {
        tree.list_mut(self.0, &pattern::ELEMENTS)
    }

    pub fn binding(self, tree: &Tree<'_>) -> Result<Option<SimpleName>> {
        Ok(tree.peek_child(self.0, &pattern::BINDING)?.map(SimpleName))
    }

    pub fn set_binding(self, tree: &mut Tree<'_>, binding: SimpleName) -> Result<()> {
        tree.set_child(self.0, &pattern::BINDING, binding.0)
    }

    pub fn clear_binding(self, tree: &mut Tree<'_>) -> Result<Option<SimpleName>> {
        Ok(tree.clear_child(self.0, &pattern::BINDING)?.map(SimpleName))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    Name(SimpleName),
    Number(NumberLiteral),
    ArrayAccess(ArrayAccess),
    Cast(CastExpression),
    Conditional(ConditionalExpression),
    Prefix(PrefixExpression),
    Postfix(PostfixExpression),
}

impl Node for Expr {
    fn cast(tree: &Tree<'_>, node: NodeId) -> Option<Self> {
        Some(match tree.kind(node) {
            NodeKind::SimpleName => Self::Name(SimpleName(node)),
            NodeKind::NumberLiteral => Self::Number(NumberLiteral(node)),
            NodeKind::ArrayAccess => Self::ArrayAccess(ArrayAccess(node)),
            NodeKind::CastExpression => Self::Cast(CastExpression(node)),
            NodeKind::ConditionalExpression => Self::Conditional(ConditionalExpression(node)),
            NodeKind::PrefixExpression => Self::Prefix(PrefixExpression(node)),
            NodeKind::PostfixExpression => Self::Postfix(PostfixExpression(node)),
            _ => return None,
        })
    }

    fn syntax(self) -> NodeId {
        match self {
            Self::Name(node) => node.0,
            Self::Number(node) => node.0,
            Self::ArrayAccess(node) => node.0,
            Self::Cast(node) => node.0,
            Self::Conditional(node) => node.0,
            Self::Prefix(node) => node.0,
            Self::Postfix(node) => node.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Primitive(PrimitiveType),
    Simple(SimpleType),
    Qualified(QualifiedType),
}

impl Node for Type {
    fn cast(tree: &Tree<'_>, node: NodeId) -> Option<Self> {
        Some(match tree.kind(node) {
            NodeKind::PrimitiveType => Self::Primitive(PrimitiveType(node)),
            NodeKind::SimpleType => Self::Simple(SimpleType(node)),
            NodeKind::QualifiedType => Self::Qualified(QualifiedType(node)),
            _ => return None,
        })
    }

    fn syntax(self) -> NodeId {
        match self {
            Self::Primitive(node) => node.0,
            Self::Simple(node) => node.0,
            Self::Qualified(node) => node.0,
        }
    }
}
