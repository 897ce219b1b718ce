use std::fmt;

use crate::tree::Slot;
use crate::{NodeId, Scalar, Tree};

/// Indented rendering of a subtree: one line per node with its kind, range
/// and scalars, then one line per structural property. Nothing is
/// materialized; unset children print as `<unset>`.
pub struct DebugDump<'t, 'db> {
    tree: &'t Tree<'db>,
    db: &'db dyn salsa::Database,
    node: NodeId,
}

impl<'db> Tree<'db> {
    #[track_caller]
    pub fn debug_dump(&self, db: &'db dyn salsa::Database, node: NodeId) -> DebugDump<'_, 'db> {
        self.data(node);
        DebugDump { tree: self, db, node }
    }
}

impl DebugDump<'_, '_> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId, depth: usize) -> fmt::Result {
        let data = self.tree.data(node);
        let kind = data.kind;
        write!(f, "{:indent$}{kind:?}", "", indent = depth * 2)?;
        if let Some(range) = data.range {
            write!(f, "@{range:?}")?;
        }
        for (slot, property) in data.slots.iter().zip(kind.storage()) {
            if let Slot::Scalar(value) = slot {
                write!(f, " {}=", property.name())?;
                match value {
                    Scalar::Symbol(symbol) => write!(f, "{:?}", symbol.text(self.db))?,
                    Scalar::PrefixOperator(operator) => write!(f, "{operator}")?,
                    Scalar::PostfixOperator(operator) => write!(f, "{operator}")?,
                    Scalar::PrimitiveType(code) => write!(f, "{code}")?,
                }
            }
        }
        writeln!(f)?;

        let indent = (depth + 1) * 2;
        for (slot, property) in data.slots.iter().zip(kind.storage()) {
            let children = match slot {
                Slot::Scalar(_) => continue,
                Slot::Child(None) => {
                    writeln!(f, "{:indent$}{} <unset>", "", property.name())?;
                    continue;
                }
                Slot::List(items) if items.is_empty() => {
                    writeln!(f, "{:indent$}{} []", "", property.name())?;
                    continue;
                }
                Slot::Child(Some(child)) => std::slice::from_ref(child),
                Slot::List(items) => items.as_slice(),
            };
            writeln!(f, "{:indent$}{}", "", property.name())?;
            for &child in children {
                self.write_node(f, self.tree.node_id(child), depth + 2)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DebugDump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.node, 0)
    }
}
