use crate::NodeFlags;

/// Grammar revision whose property layout a tree exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeVariant {
    /// Single-value accessors derived from the sole element of a list.
    Legacy,
    #[default]
    Current,
}

impl ShapeVariant {
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Legacy => 0,
            Self::Current => 1,
        }
    }
}

/// Settings fixed for the lifetime of a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    shape: ShapeVariant,
    default_flags: NodeFlags,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: ShapeVariant) -> Self {
        self.shape = shape;
        self
    }

    /// Flags stamped on every node the tree creates, clones included.
    pub fn with_default_flags(mut self, flags: NodeFlags) -> Self {
        self.default_flags = flags;
        self
    }

    pub fn shape(&self) -> ShapeVariant {
        self.shape
    }

    pub fn default_flags(&self) -> NodeFlags {
        self.default_flags
    }
}
