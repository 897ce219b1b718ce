use std::fmt;

use trellis_span::Symbol;

/// Value stored in a scalar property slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar<'db> {
    Symbol(Symbol<'db>),
    PrefixOperator(PrefixOperator),
    PostfixOperator(PostfixOperator),
    PrimitiveType(PrimitiveTypeCode),
}

impl<'db> Scalar<'db> {
    pub fn as_symbol(self) -> Option<Symbol<'db>> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub(crate) fn conforms_to(self, ty: ScalarType) -> bool {
        matches!(
            (self, ty),
            (
                Self::Symbol(_),
                ScalarType::Identifier | ScalarType::Number | ScalarType::OperatorToken,
            )
                | (Self::PrefixOperator(_), ScalarType::PrefixOperator)
                | (Self::PostfixOperator(_), ScalarType::PostfixOperator)
                | (Self::PrimitiveType(_), ScalarType::PrimitiveType)
        )
    }
}

impl From<PrefixOperator> for Scalar<'_> {
    fn from(operator: PrefixOperator) -> Self {
        Self::PrefixOperator(operator)
    }
}

impl From<PostfixOperator> for Scalar<'_> {
    fn from(operator: PostfixOperator) -> Self {
        Self::PostfixOperator(operator)
    }
}

impl From<PrimitiveTypeCode> for Scalar<'_> {
    fn from(code: PrimitiveTypeCode) -> Self {
        Self::PrimitiveType(code)
    }
}

impl<'db> From<Symbol<'db>> for Scalar<'db> {
    fn from(symbol: Symbol<'db>) -> Self {
        Self::Symbol(symbol)
    }
}

/// Declared value type of a scalar property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Non-empty symbol, defaults to `MISSING`.
    Identifier,
    /// Non-empty symbol, defaults to `0`.
    Number,
    /// Any symbol, defaults to the empty string.
    OperatorToken,
    PrefixOperator,
    PostfixOperator,
    PrimitiveType,
}

impl ScalarType {
    pub(crate) const fn requires_text(self) -> bool {
        matches!(self, Self::Identifier | Self::Number)
    }
}

macro_rules! operators {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$variant_meta:meta])* $variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

operators! {
    /// Operator of a `PrefixExpression`.
    #[derive(Default)]
    PrefixOperator {
        #[default]
        Increment => "++",
        Decrement => "--",
        Plus => "+",
        Minus => "-",
        Complement => "~",
        Not => "!",
    }
}

operators! {
    /// Operator of a `PostfixExpression`.
    #[derive(Default)]
    PostfixOperator {
        #[default]
        Increment => "++",
        Decrement => "--",
    }
}

operators! {
    #[derive(Default)]
    PrimitiveTypeCode {
        Byte => "byte",
        Short => "short",
        Char => "char",
        #[default]
        Int => "int",
        Long => "long",
        Float => "float",
        Double => "double",
        Boolean => "boolean",
        Void => "void",
    }
}
