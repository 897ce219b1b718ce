use la_arena::RawIdx;

use crate::property::{PropertyDescriptor, PropertyKind};
use crate::tree::Slot;
use crate::{NodeId, NodeKind, Scalar, Tree};

/// Comparison policy for [`Tree::subtree_match_with`]. The default compares
/// scalars by value; interned symbols compare by identity.
pub trait Matcher<'db> {
    fn match_scalar(
        &mut self,
        property: &'static PropertyDescriptor,
        left: Scalar<'db>,
        right: Scalar<'db>,
    ) -> bool {
        let _ = property;
        left == right
    }
}

/// Plain structural equivalence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralMatcher;

impl Matcher<'_> for StructuralMatcher {}

/// One side of a comparison. An unset mandatory child stands for the
/// placeholder it would materialize into, so comparing never allocates.
#[derive(Clone, Copy)]
enum Side {
    Node(RawIdx),
    Placeholder(NodeKind),
    Absent,
}

impl<'db> Tree<'db> {
    /// Whether `node` and `other_node` of `other` are structurally
    /// equivalent: same kinds, equal scalars, and pairwise matching children
    /// in order. Node identity and tree membership are ignored.
    #[track_caller]
    pub fn subtree_match(&self, node: NodeId, other: &Self, other_node: NodeId) -> bool {
        self.subtree_match_with(&mut StructuralMatcher, node, other, other_node)
    }

    #[track_caller]
    pub fn subtree_match_with(
        &self,
        matcher: &mut impl Matcher<'db>,
        node: NodeId,
        other: &Self,
        other_node: NodeId,
    ) -> bool {
        self.data(node);
        other.data(other_node);
        self.match_sides(matcher, Side::Node(node.raw()), other, Side::Node(other_node.raw()))
    }

    fn match_sides(
        &self,
        matcher: &mut impl Matcher<'db>,
        left: Side,
        other: &Self,
        right: Side,
    ) -> bool {
        let kind = match (self.side_kind(left), other.side_kind(right)) {
            (None, None) => return true,
            (Some(left), Some(right)) if left == right => left,
            _ => return false,
        };

        kind.storage().iter().all(|&property| {
            let slot = property.slot();
            match property.kind() {
                PropertyKind::Scalar(_) => {
                    let left = self.side_scalar(left, property);
                    let right = other.side_scalar(right, property);
                    matcher.match_scalar(property, left, right)
                }
                PropertyKind::Child(_) => {
                    let left = self.side_child(left, property);
                    let right = other.side_child(right, property);
                    self.match_sides(matcher, left, other, right)
                }
                PropertyKind::List(_) => {
                    let left = self.side_list(left, slot);
                    let right = other.side_list(right, slot);
                    match (left, right) {
                        ([], &[right]) => self.sole_placeholder(kind, slot).is_some_and(|left| {
                            self.match_sides(matcher, left, other, Side::Node(right))
                        }),
                        (&[left], []) => other.sole_placeholder(kind, slot).is_some_and(|right| {
                            self.match_sides(matcher, Side::Node(left), other, right)
                        }),
                        _ => {
                            left.len() == right.len()
                                && left.iter().zip(right).all(|(&left, &right)| {
                                    let (left, right) = (Side::Node(left), Side::Node(right));
                                    self.match_sides(matcher, left, other, right)
                                })
                        }
                    }
                }
            }
        })
    }

    fn side_kind(&self, side: Side) -> Option<NodeKind> {
        match side {
            Side::Node(raw) => Some(self.raw_data(raw).kind),
            Side::Placeholder(kind) => Some(kind),
            Side::Absent => None,
        }
    }

    fn side_scalar(&self, side: Side, property: &'static PropertyDescriptor) -> Scalar<'db> {
        match (side, property.kind()) {
            (Side::Node(raw), _) => match self.raw_data(raw).slots[property.slot()] {
                Slot::Scalar(value) => value,
                _ => unreachable!("{property:?} is not a scalar slot"),
            },
            (_, PropertyKind::Scalar(ty)) => self.default_scalar(ty),
            _ => unreachable!("{property:?} is not a scalar property"),
        }
    }

    fn side_child(&self, side: Side, property: &'static PropertyDescriptor) -> Side {
        let child = match side {
            Side::Node(raw) => match self.raw_data(raw).slots[property.slot()] {
                Slot::Child(child) => child,
                _ => unreachable!("{property:?} is not a child slot"),
            },
            Side::Placeholder(_) | Side::Absent => None,
        };
        match (child, property.placeholder()) {
            (Some(child), _) => Side::Node(child),
            (None, Some(kind)) => Side::Placeholder(kind),
            (None, None) => Side::Absent,
        }
    }

    /// What an empty list slot stands for when this tree's shape reads it
    /// through a single-value view: the view's placeholder.
    fn sole_placeholder(&self, kind: NodeKind, slot: usize) -> Option<Side> {
        let property = kind.info().live_property(self.shape(), slot);
        if !property.is_sole_element_view() {
            return None;
        }
        property.placeholder().map(Side::Placeholder)
    }

    fn side_list(&self, side: Side, slot: usize) -> &[RawIdx] {
        match side {
            Side::Node(raw) => self.list_items(raw, slot),
            Side::Placeholder(_) | Side::Absent => &[],
        }
    }
}
