use std::fmt;

/// Per-node marker bits. Flags are tree-local: clones start from the target
/// tree's default flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeFlags {
    bits: u8,
}

impl NodeFlags {
    pub const EMPTY: Self = Self { bits: 0 };
    /// The node was built from text that did not parse cleanly.
    pub const MALFORMED: Self = Self { bits: 1 << 0 };
    /// The node was produced by the parser rather than by an edit.
    pub const ORIGINAL: Self = Self { bits: 1 << 1 };
    /// Structural edits on the node, or attaching it elsewhere, are rejected.
    pub const PROTECT: Self = Self { bits: 1 << 2 };
    /// The parser synthesized the node while recovering from an error.
    pub const RECOVERED: Self = Self { bits: 1 << 3 };

    const NAMES: [(Self, &'static str); 4] = [
        (Self::MALFORMED, "MALFORMED"),
        (Self::ORIGINAL, "ORIGINAL"),
        (Self::PROTECT, "PROTECT"),
        (Self::RECOVERED, "RECOVERED"),
    ];

    pub const fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    pub const fn difference(self, other: Self) -> Self {
        Self { bits: self.bits & !other.bits }
    }

    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl std::ops::BitOr for NodeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for NodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::NodeFlags;

    #[test]
    fn union_and_difference() {
        let flags = NodeFlags::ORIGINAL | NodeFlags::PROTECT;
        assert!(flags.contains(NodeFlags::PROTECT));
        assert!(!flags.contains(NodeFlags::MALFORMED));

        let flags = flags.difference(NodeFlags::PROTECT);
        assert!(!flags.contains(NodeFlags::PROTECT));
        assert_eq!(format!("{flags:?}"), "{ORIGINAL}");
        assert!(NodeFlags::EMPTY.is_empty());
    }
}
