//! Approximate memory accounting, in bytes.
//!
//! The figures model an object header per node plus one word per field and
//! are meant for relative comparisons, not as exact heap usage.

use crate::property::PropertyKind;
use crate::tree::Slot;
use crate::{NodeId, ScalarType, Tree};

/// Object header size.
pub const HEADERS: usize = 2 * 4 + 4;

/// Size of a node with no declared properties.
pub const BASE_NODE_SIZE: usize = HEADERS + 7 * 4;

/// Cost of a string of `len` characters: the string object plus its
/// character array.
pub const fn string_size(len: usize) -> usize {
    (HEADERS + 4 * 4) + (HEADERS + 2 * len)
}

impl<'db> Tree<'db> {
    /// Cost of `node` alone: its kind's base size plus the text of its
    /// symbol-valued scalars.
    #[track_caller]
    pub fn mem_size(&self, db: &'db dyn salsa::Database, node: NodeId) -> usize {
        let data = self.data(node);
        let mut size = data.kind.info().base_size;
        for (slot, property) in data.slots.iter().zip(data.kind.storage()) {
            let (Slot::Scalar(value), PropertyKind::Scalar(ty)) = (slot, property.kind()) else {
                continue;
            };
            let Some(symbol) = value.as_symbol() else { continue };
            if ty == ScalarType::Identifier && self.is_missing_identifier(symbol) {
                continue;
            }
            size += string_size(symbol.text(db).chars().count());
        }
        size
    }

    /// [`Tree::mem_size`] of `node` plus every populated descendant. Unset
    /// slots cost nothing.
    #[track_caller]
    pub fn tree_size(&self, db: &'db dyn salsa::Database, node: NodeId) -> usize {
        let children =
            self.children(node).map(|child| self.tree_size(db, child)).sum::<usize>();
        self.mem_size(db, node) + children
    }
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;
    use trellis_span::Symbol;

    use super::{BASE_NODE_SIZE, string_size};
    use crate::shapes::{array_access, number_literal, pattern, simple_name};
    use crate::{NodeKind, Tree, TreeConfig};

    #[test]
    fn leaf_sizes() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let name = tree.new_node(NodeKind::SimpleName);
        let literal = tree.new_node(NodeKind::NumberLiteral);
        let primitive = tree.new_node(NodeKind::PrimitiveType);

        assert_eq!(tree.mem_size(&db, name), BASE_NODE_SIZE + 8);
        assert_eq!(tree.mem_size(&db, literal), BASE_NODE_SIZE + 4 + string_size(1));
        assert_eq!(tree.mem_size(&db, primitive), BASE_NODE_SIZE + 4);

        tree.set_scalar(&db, name, &simple_name::IDENTIFIER, Symbol::new(&db, "total")).unwrap();
        tree.set_scalar(&db, literal, &number_literal::TOKEN, Symbol::new(&db, "1024")).unwrap();
        assert_eq!(tree.mem_size(&db, name), BASE_NODE_SIZE + 8 + string_size(5));
        assert_eq!(tree.mem_size(&db, literal), BASE_NODE_SIZE + 4 + string_size(4));

        for leaf in [name, literal, primitive] {
            assert_eq!(tree.tree_size(&db, leaf), tree.mem_size(&db, leaf));
        }
    }

    #[test]
    fn list_of_identical_leaves() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let root = tree.new_node(NodeKind::Pattern);
        let leaves = [(); 4].map(|()| tree.new_node(NodeKind::NumberLiteral));
        tree.list_mut(root, &pattern::ELEMENTS).unwrap().extend(leaves).unwrap();

        let leaf = tree.mem_size(&db, leaves[0]);
        assert_eq!(tree.tree_size(&db, root), tree.mem_size(&db, root) + 4 * leaf);
    }

    #[test]
    fn unset_children_cost_nothing() {
        let db = DatabaseImpl::new();
        let mut tree = Tree::new(&db, TreeConfig::default());
        let access = tree.new_node(NodeKind::ArrayAccess);
        assert_eq!(tree.tree_size(&db, access), tree.mem_size(&db, access));

        let array = tree.child(access, &array_access::ARRAY).unwrap().unwrap();
        assert_eq!(
            tree.tree_size(&db, access),
            tree.mem_size(&db, access) + tree.mem_size(&db, array)
        );
    }
}
