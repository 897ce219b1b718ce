//! Mutable syntax trees with reflectable structural properties.
//!
//! Nodes live in a per-tree arena and are addressed by [`NodeId`]. Every
//! kind declares its properties once, as static [`PropertyDescriptor`]s, and
//! all access, typed or generic, goes through the same checked protocol:
//! a node has at most one parent, never leaves its tree, and can never
//! become its own ancestor.

/// Typed wrappers over each node kind.
pub mod ast;
mod clone;
mod config;
mod dump;
mod error;
mod finder;
mod flags;
mod kind;
mod list;
mod matcher;
mod mutation;
mod observer;
mod property;
mod scalar;
/// Descriptor tables, one module per node kind.
pub mod shapes;
mod size;
mod tree;
mod visit;

pub use clone::Subtree;
pub use config::{ShapeVariant, TreeConfig};
pub use dump::DebugDump;
pub use error::{InvalidArgument, Result, TreeError, Unsupported};
pub use finder::NodeFinder;
pub use flags::NodeFlags;
pub use kind::{ChildType, NodeKind};
pub use list::{NodeList, NodeListMut};
pub use matcher::{Matcher, StructuralMatcher};
pub use mutation::PropertyValue;
pub use observer::{TreeEvent, TreeObserver};
pub use property::{Cardinality, PropertyDescriptor, PropertyKind};
pub use scalar::{PostfixOperator, PrefixOperator, PrimitiveTypeCode, Scalar, ScalarType};
pub use size::{BASE_NODE_SIZE, HEADERS, string_size};
pub use tree::{NodeId, Tree, TreeId};
pub use visit::{Preorder, TryVisitor, Visitor, WalkEvent};
