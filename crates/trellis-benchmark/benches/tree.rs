use std::hint::black_box;

use codspeed_criterion_compat::{BenchmarkId, Criterion, criterion_group, criterion_main};
use salsa::DatabaseImpl;
use trellis_tree::ast::{ConditionalExpression, Node, PrefixExpression, SimpleName};
use trellis_tree::{NodeId, PrefixOperator, Tree, TreeConfig, Visitor};

/// Builds a complete conditional tree of the given depth whose leaves are
/// negated names.
fn build<'db>(tree: &mut Tree<'db>, db: &'db DatabaseImpl, depth: usize) -> NodeId {
    if depth == 0 {
        let name = SimpleName::with_identifier(tree, db, "leaf").unwrap();
        let prefix = PrefixExpression::new(tree);
        prefix.set_operator(tree, db, PrefixOperator::Minus).unwrap();
        prefix.set_operand(tree, name.syntax()).unwrap();
        return prefix.syntax();
    }

    let node = ConditionalExpression::new(tree);
    let condition = build(tree, db, depth - 1);
    let then = build(tree, db, depth - 1);
    let otherwise = build(tree, db, depth - 1);
    node.condition_elements_mut(tree).unwrap().push(condition).unwrap();
    node.then_elements_mut(tree).unwrap().push(then).unwrap();
    node.else_elements_mut(tree).unwrap().push(otherwise).unwrap();
    node.syntax()
}

struct Count(usize);

impl<'db> Visitor<'db> for Count {
    fn visit(&mut self, _tree: &Tree<'db>, _node: NodeId) -> bool {
        self.0 += 1;
        true
    }
}

fn benchmark_tree(c: &mut Criterion) {
    let db = DatabaseImpl::new();
    let mut group = c.benchmark_group("Tree Benchmark");

    for depth in [4, 6, 8] {
        let mut tree = Tree::new(&db, TreeConfig::default());
        let root = build(&mut tree, &db, depth);

        group.bench_with_input(BenchmarkId::new("traverse", depth), &root, |b, &root| {
            b.iter(|| {
                let mut count = Count(0);
                tree.accept(root, &mut count);
                black_box(count.0);
            });
        });

        group.bench_with_input(BenchmarkId::new("tree_size", depth), &root, |b, &root| {
            b.iter(|| black_box(tree.tree_size(&db, root)));
        });

        group.bench_with_input(BenchmarkId::new("clone", depth), &root, |b, &root| {
            b.iter(|| {
                let mut target = Tree::new(&db, TreeConfig::default());
                black_box(tree.clone_subtree(root, &mut target).unwrap());
            });
        });

        let mut target = Tree::new(&db, TreeConfig::default());
        let copy = tree.clone_subtree(root, &mut target).unwrap();
        group.bench_with_input(BenchmarkId::new("subtree_match", depth), &root, |b, &root| {
            b.iter(|| black_box(tree.subtree_match(root, &target, copy)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_tree);
criterion_main!(benches);
