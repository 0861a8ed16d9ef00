use ordered_tree::{trees_equal, Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking after every search and
/// walk that the two still agree.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Search(x) => {
                if tree.search(x) != set.contains(x) {
                    return false;
                }
            }
            Op::InOrder => {
                if !tree.in_order().into_iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && set.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.in_order().into_iter().eq(expected)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.search(x))
}

#[quickcheck]
fn duplicate_inserts_change_nothing(xs: Vec<i8>) -> bool {
    let once: Tree<_> = xs.iter().copied().collect();
    let mut twice: Tree<_> = xs.iter().copied().collect();
    twice.extend(xs.iter().copied());

    trees_equal(&once, &twice)
}

#[quickcheck]
fn equality_is_reflexive_and_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a: Tree<_> = xs.into_iter().collect();
    let b: Tree<_> = ys.into_iter().collect();

    trees_equal(&a, &a) && trees_equal(&a, &b) == trees_equal(&b, &a)
}

#[quickcheck]
fn same_insertion_order_is_equal(xs: Vec<u8>) -> bool {
    let a: Tree<_> = xs.iter().copied().collect();
    let b: Tree<_> = xs.iter().copied().collect();

    a == b
}

#[quickcheck]
fn levels_match_level_order_and_height(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let levels = tree.levels();
    let flattened: Vec<_> = levels.iter().flatten().copied().collect();

    flattened == tree.level_order()
        && levels.len() as isize - 1 == tree.height()
        && levels.iter().all(|level| !level.is_empty())
}

#[quickcheck]
fn post_order_ends_at_root(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let pre = tree.pre_order();
    let post = tree.post_order();

    pre.first() == post.last() && pre.len() == post.len()
}

#[quickcheck]
fn for_each_matches_collected_walks(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let walk = |order| {
        let mut values = Vec::new();
        tree.for_each(order, |x| values.push(*x));
        values
    };
    let owned = |values: Vec<&i8>| values.into_iter().copied().collect::<Vec<_>>();

    walk(Order::Pre) == owned(tree.pre_order())
        && walk(Order::In) == owned(tree.in_order())
        && walk(Order::Post) == owned(tree.post_order())
        && walk(Order::Level) == owned(tree.level_order())
}

#[quickcheck]
fn sorted_input_is_a_chain(n: u8) -> bool {
    let tree: Tree<_> = (0..n).collect();

    tree.height() == n as isize - 1
}
