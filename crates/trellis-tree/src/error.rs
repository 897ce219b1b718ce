use crate::{ChildType, NodeKind, ScalarType, ShapeVariant};

pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Failure of a tree operation. Every variant is reported before any state
/// changes, so a failed call leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("`{kind:?}.{property}` is unsupported: {reason}")]
    UnsupportedOperation { kind: NodeKind, property: &'static str, reason: Unsupported },
    #[error("index was built at stamp {built} but the tree is at stamp {current}")]
    IllegalState { built: u64, current: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("node already has a parent")]
    AlreadyParented,
    #[error("node belongs to a different tree")]
    ForeignTree,
    #[error("assignment would make a node its own ancestor")]
    Cycle,
    #[error("{found:?} is not a valid {expected:?} child")]
    TypeMismatch { expected: ChildType, found: NodeKind },
    #[error("`{property}` holds {expected:?} values")]
    ScalarMismatch { property: &'static str, expected: ScalarType },
    #[error("`{0}` requires a non-empty value")]
    EmptyValue(&'static str),
    #[error("node is protected")]
    Protected,
    #[error("the same node appears more than once in one insertion")]
    DuplicateInBatch,
    #[error("`{0}` is mandatory and cannot be cleared")]
    MandatoryProperty(&'static str),
    #[error("index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("`{property}` is not a property of {kind:?}")]
    NotAProperty { kind: NodeKind, property: &'static str },
    #[error("`{property}` is not a {expected} property")]
    PropertyKind { property: &'static str, expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Unsupported {
    #[error("not part of the {0:?} shape")]
    NotInShape(ShapeVariant),
    #[error("the underlying list holds {0} elements")]
    MultipleElements(usize),
    #[error("lists are edited in place, not assigned")]
    ListAssignment,
}

/// Logs a rejected mutation before handing the error back to the caller.
pub(crate) fn rejected(error: impl Into<TreeError>) -> TreeError {
    let error = error.into();
    tracing::debug!(%error, "mutation rejected");
    error
}
