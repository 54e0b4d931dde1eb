use binarytree::tree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and queries both agree on every answer.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(v) => tree.insert(v.clone()) == set.insert(v.clone()),
        Op::Contains(v) => tree.contains(v) == set.contains(v),
        Op::SmallerThan(v) => {
            tree.elements_smaller_than(v) == set.range(..v.clone()).cloned().collect::<Vec<_>>()
        }
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.as_sorted_list() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn sorted_no_duplicates_no_omissions(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted = tree.as_sorted_list();

    sorted.windows(2).all(|pair| pair[0] < pair[1])
        && xs.iter().all(|x| sorted.binary_search(x).is_ok())
        && sorted.len() == tree.len()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.as_sorted_list();
    let height = tree.height();

    xs.iter().all(|x| !tree.insert(*x))
        && tree.as_sorted_list() == before
        && tree.height() == height
}

#[quickcheck]
fn smaller_than_is_a_filtered_sorted_list(xs: Vec<i8>, bound: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let expected: Vec<_> = tree
        .as_sorted_list()
        .into_iter()
        .filter(|x| *x < bound)
        .collect();

    tree.elements_smaller_than(&bound) == expected
}

#[quickcheck]
fn smaller_than_minimum_is_empty(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    match tree.iter().next() {
        Some(min) => tree.elements_smaller_than(min).is_empty(),
        None => tree.elements_smaller_than(&u8::MAX).is_empty(),
    }
}

#[quickcheck]
fn print_matches_sorted_list(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut out = Vec::new();
    tree.print_to(&mut out).unwrap();

    let expected = tree
        .as_sorted_list()
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out == format!("{expected}\n").into_bytes()
}
