use std::sync::{Arc, Mutex};

use expect_test::expect;
use salsa::DatabaseImpl;
use trellis_tree::shapes::{array_access, pattern, simple_name};
use trellis_tree::{
    InvalidArgument, NodeKind, PropertyKind, PropertyValue, ShapeVariant, Tree, TreeConfig,
    TreeError, TreeEvent, TreeObserver,
};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn take(&self) -> String {
        let mut events = self.0.lock().unwrap();
        let log = events.iter().map(|event| format!("{event}\n")).collect::<String>();
        events.clear();
        log
    }

    fn record(&self, phase: &str, event: &TreeEvent) {
        let line = match event {
            TreeEvent::ReplaceChild { property, old, new, .. } => format!(
                "{phase} replace {}: {} -> {}",
                property.name(),
                old.is_some(),
                new.is_some()
            ),
            TreeEvent::AddChild { property, index, .. } => {
                format!("{phase} add {}[{index}]", property.name())
            }
            TreeEvent::RemoveChild { property, index, .. } => {
                format!("{phase} remove {}[{index}]", property.name())
            }
            TreeEvent::ReplaceElement { property, index, .. } => {
                format!("{phase} replace {}[{index}]", property.name())
            }
            TreeEvent::ValueChange { property, .. } => format!("{phase} value {}", property.name()),
            TreeEvent::LazyInit { property, .. } => format!("{phase} lazy {}", property.name()),
            TreeEvent::Clone { copy, .. } => format!("{phase} clone {}", copy.is_some()),
        };
        self.0.lock().unwrap().push(line);
    }
}

impl TreeObserver for Recorder {
    fn pre(&mut self, event: &TreeEvent) {
        self.record("pre", event);
    }

    fn post(&mut self, event: &TreeEvent) {
        self.record("post", event);
    }
}

#[test]
fn observer_sees_every_accepted_change() {
    let db = DatabaseImpl::new();
    let mut tree = Tree::new(&db, TreeConfig::default());
    let recorder = Recorder::default();
    tree.set_observer(recorder.clone());

    let access = tree.new_node(NodeKind::ArrayAccess);
    let name = tree.new_node(NodeKind::SimpleName);
    let index = tree.new_node(NodeKind::NumberLiteral);

    tree.child(access, &array_access::ARRAY).unwrap();
    tree.set_child(access, &array_access::ARRAY, name).unwrap();
    tree.set_scalar(&db, name, &simple_name::IDENTIFIER, trellis_span::Symbol::new(&db, "xs"))
        .unwrap();
    tree.list_mut(access, &array_access::INDEXES).unwrap().push(index).unwrap();
    tree.detach(index).unwrap();
    tree.copy_subtree(access).unwrap();

    expect![[r#"
        post lazy array
        pre replace array: true -> true
        post replace array: true -> true
        pre value identifier
        post value identifier
        pre add indexes[0]
        post add indexes[0]
        pre remove indexes[0]
        post remove indexes[0]
        pre clone false
        post clone true
    "#]]
    .assert_eq(&recorder.take());
}

#[test]
fn rejected_changes_are_silent() {
    let db = DatabaseImpl::new();
    let mut tree = Tree::new(&db, TreeConfig::default());
    let recorder = Recorder::default();
    tree.set_observer(recorder.clone());

    let access = tree.new_node(NodeKind::ArrayAccess);
    let literal = tree.new_node(NodeKind::NumberLiteral);
    tree.set_child(access, &array_access::ARRAY, literal).unwrap();
    recorder.take();
    let stamp = tree.modification_stamp();

    assert!(tree.set_child(access, &array_access::ARRAY, literal).is_err());
    assert!(tree.list_mut(access, &array_access::INDEXES).unwrap().push(access).is_err());
    assert!(tree.list_mut(access, &array_access::INDEXES).unwrap().extend([literal]).is_err());

    assert_eq!(recorder.take(), "");
    assert_eq!(tree.modification_stamp(), stamp);
}

#[test]
fn every_property_round_trips_through_reflection() {
    let db = DatabaseImpl::new();
    for shape in [ShapeVariant::Legacy, ShapeVariant::Current] {
        let mut tree = Tree::new(&db, TreeConfig::new().with_shape(shape));
        for kind in NodeKind::ALL {
            let node = tree.new_node(kind);
            for &property in kind.structural_properties(shape) {
                let value = tree.structural_property(node, property).unwrap();
                match (property.kind(), value) {
                    (PropertyKind::Scalar(_), value @ PropertyValue::Scalar(_)) => {
                        tree.set_structural_property(&db, node, property, value.clone()).unwrap();
                        assert_eq!(tree.structural_property(node, property), Ok(value));
                    }
                    (PropertyKind::Child(ty), PropertyValue::Child(current)) => {
                        let replacement_kind = match current {
                            Some(current) => tree.kind(current),
                            None => NodeKind::ALL
                                .into_iter()
                                .find(|kind| kind.conforms_to(ty))
                                .unwrap(),
                        };
                        let replacement = tree.new_node(replacement_kind);
                        tree.set_structural_property(
                            &db,
                            node,
                            property,
                            PropertyValue::Child(Some(replacement)),
                        )
                        .unwrap();
                        assert_eq!(
                            tree.structural_property(node, property),
                            Ok(PropertyValue::Child(Some(replacement)))
                        );
                        assert_eq!(tree.location_in_parent(replacement), Some(property));
                    }
                    (PropertyKind::List(ty), PropertyValue::List(items)) => {
                        assert!(items.is_empty());
                        let element_kind =
                            NodeKind::ALL.into_iter().find(|kind| kind.conforms_to(ty)).unwrap();
                        let elements = [(); 3].map(|()| tree.new_node(element_kind));
                        tree.list_mut(node, property).unwrap().extend(elements).unwrap();
                        assert_eq!(
                            tree.structural_property(node, property),
                            Ok(PropertyValue::List(elements.to_vec()))
                        );
                    }
                    (kind, value) => panic!("{property:?} is {kind:?} but read {value:?}"),
                }
            }

            let mut target = Tree::new(&db, TreeConfig::new().with_shape(shape));
            let copy = tree.clone_subtree(node, &mut target).unwrap();
            assert!(tree.subtree_match(node, &target, copy), "{kind:?} in {shape:?}");
        }
    }
}

#[test]
fn attaching_into_a_foreign_list_fails() {
    let db = DatabaseImpl::new();
    let mut tree = Tree::new(&db, TreeConfig::default());
    let mut other = Tree::new(&db, TreeConfig::default());
    let node = tree.new_node(NodeKind::Pattern);
    let foreign = other.new_node(NodeKind::SimpleName);

    let error = tree.list_mut(node, &pattern::ELEMENTS).unwrap().push(foreign);

    assert_eq!(error, Err(TreeError::InvalidArgument(InvalidArgument::ForeignTree)));
    assert!(tree.list(node, &pattern::ELEMENTS).unwrap().is_empty());
    assert_eq!(other.parent(foreign), None);
}

#[test]
fn ancestors_and_root() {
    let db = DatabaseImpl::new();
    let mut tree = Tree::new(&db, TreeConfig::default());
    let outer = tree.new_node(NodeKind::Pattern);
    let inner = tree.new_node(NodeKind::ArrayAccess);
    tree.list_mut(outer, &pattern::ELEMENTS).unwrap().push(inner).unwrap();
    let leaf = tree.child(inner, &array_access::ARRAY).unwrap().unwrap();

    assert_eq!(tree.ancestors(leaf).collect::<Vec<_>>(), [leaf, inner, outer]);
    assert_eq!(tree.root(leaf), outer);
    assert_eq!(tree.location_in_parent(inner), Some(&pattern::ELEMENTS));
    assert_eq!(tree.location_in_parent(outer), None);
}
