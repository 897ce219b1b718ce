use crate::property::PropertyDescriptor;
use crate::{ShapeVariant, shapes};

/// Kind tag of a node. The discriminant is a stable small integer that
/// external consumers may use as a switch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum NodeKind {
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

impl NodeKind {
    pub const ALL: [Self; 12] = [
        Self::SimpleName,
        Self::NumberLiteral,
        Self::Operator,
        Self::PrimitiveType,
        Self::SimpleType,
        Self::QualifiedType,
        Self::ArrayAccess,
        Self::CastExpression,
        Self::ConditionalExpression,
        Self::PrefixExpression,
        Self::PostfixExpression,
        Self::Pattern,
    ];

    pub const fn tag(self) -> u16 {
        self as u16
    }

    pub fn from_tag(tag: u16) -> Option<Self> {
        Self::ALL.get(usize::from(tag)).copied()
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether a node of this kind may stand where `ty` is declared.
    pub const fn conforms_to(self, ty: ChildType) -> bool {
        match ty {
            ChildType::Any => true,
            ChildType::Expression => matches!(
                self,
                Self::SimpleName
                    | Self::NumberLiteral
                    | Self::ArrayAccess
                    | Self::CastExpression
                    | Self::ConditionalExpression
                    | Self::PrefixExpression
                    | Self::PostfixExpression
            ),
            ChildType::Type => {
                matches!(self, Self::PrimitiveType | Self::SimpleType | Self::QualifiedType)
            }
            ChildType::Name => matches!(self, Self::SimpleName),
            ChildType::Operator => matches!(self, Self::Operator),
        }
    }

    /// Every descriptor backing a storage slot, in grammar order.
    pub fn storage(self) -> &'static [&'static PropertyDescriptor] {
        self.info().storage
    }

    /// The live property list of this kind under `shape`.
    pub fn structural_properties(
        self,
        shape: ShapeVariant,
    ) -> &'static [&'static PropertyDescriptor] {
        self.info().shapes[shape.index()]
    }

    pub fn property_by_name(
        self,
        shape: ShapeVariant,
        name: &str,
    ) -> Option<&'static PropertyDescriptor> {
        self.structural_properties(shape).iter().copied().find(|property| property.name() == name)
    }

    pub(crate) fn info(self) -> &'static KindInfo {
        shapes::info(self)
    }
}

/// Declared type of a child or list slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildType {
    Any,
    Expression,
    Type,
    Name,
    Operator,
}

impl ChildType {
    /// Whether some kind admitted here can itself have children, which is
    /// what makes an assignment able to close a cycle.
    pub const fn admits_branches(self) -> bool {
        match self {
            Self::Any | Self::Expression | Self::Type => true,
            Self::Name | Self::Operator => false,
        }
    }
}

/// Static description of one node kind.
pub(crate) struct KindInfo {
    pub(crate) name: &'static str,
    /// Fixed per-node cost in bytes, before variable scalar costs.
    pub(crate) base_size: usize,
    /// Primary descriptor for each storage slot, indexed by slot.
    pub(crate) storage: &'static [&'static PropertyDescriptor],
    /// Live descriptor lists, indexed by [`ShapeVariant::index`].
    pub(crate) shapes: [&'static [&'static PropertyDescriptor]; 2],
}

impl KindInfo {
    /// Whether the slot is visible through any descriptor live in `shape`.
    pub(crate) fn slot_is_live(&self, shape: ShapeVariant, slot: usize) -> bool {
        self.shapes[shape.index()].iter().any(|property| property.slot() == slot)
    }

    /// The descriptor a reader of `shape` uses for `slot`.
    pub(crate) fn live_property(
        &self,
        shape: ShapeVariant,
        slot: usize,
    ) -> &'static PropertyDescriptor {
        self.shapes[shape.index()]
            .iter()
            .copied()
            .find(|property| property.slot() == slot)
            .unwrap_or(self.storage[slot])
    }
}
