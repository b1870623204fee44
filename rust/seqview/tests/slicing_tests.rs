use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use itertools::iproduct;
use seqview::{
    Cardinality, CollectionView, EnumerationConfig, Leaf, ListView, LiveVec, Result, Strategy, View,
};
use seqview_testkit::reference::{Slice, apply_all};

fn slice<L: Leaf>(view: &View<L>, step: Slice) -> View<L> {
    match step {
        Slice::SkipFirst(n) => view.skip_first(n),
        Slice::SkipLast(n) => view.skip_last(n),
        Slice::TakeFirst(n) => view.take_first(n),
        Slice::TakeLast(n) => view.take_last(n),
    }
}

fn slice_exact<L: Leaf>(view: &View<L>, step: Slice) -> Result<View<L>> {
    match step {
        Slice::SkipFirst(n) => view.skip_first_exact(n),
        Slice::SkipLast(n) => view.skip_last_exact(n),
        Slice::TakeFirst(n) => view.take_first_exact(n),
        Slice::TakeLast(n) => view.take_last_exact(n),
    }
}

fn assert_list_matches(view: &ListView<i32>, expected: &[i32], context: &str) {
    assert_eq!(view.to_vec().unwrap(), expected, "{context}: {view:?}");
    assert_eq!(view.count().unwrap(), expected.len(), "{context}");
    assert!(view.cardinality().admits(expected.len()), "{context}");
    for (index, value) in expected.iter().enumerate() {
        assert_eq!(view.get(index).unwrap(), *value, "{context}");
    }
    assert!(view.get(expected.len()).is_err(), "{context}");
    assert_eq!(view.last().unwrap(), expected.last().copied(), "{context}");
    for strategy in [Strategy::Indexed, Strategy::Delegated] {
        let iterated = view
            .iter_with(&EnumerationConfig::with_strategy(strategy))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(iterated, expected, "{context}: {strategy:?}");
    }
}

#[test]
fn test_single_slice_grid() {
    for n in 0..=6usize {
        let values: Vec<i32> = (0..n as i32).collect();
        let live = LiveVec::from(values.clone());
        let deque = Rc::new(RefCell::new(values.iter().copied().collect::<VecDeque<_>>()));
        let over_deque = ListView::over(&deque);
        let collection = CollectionView::over(&deque);

        for k in 0..=n + 1 {
            for step in Slice::all(k) {
                let expected = step.apply(&values);
                let context = format!("{step:?} over {n} elements");
                assert_list_matches(&slice(&live.view(), step), expected, &context);
                assert_list_matches(&slice(&over_deque, step), expected, &context);
                assert_eq!(slice(&collection, step).to_vec().unwrap(), expected, "{context}");
            }
        }
    }
}

#[test]
fn test_two_slice_grid() {
    for n in 0..=6usize {
        let values: Vec<i32> = (0..n as i32).collect();
        let live = LiveVec::from(values.clone());
        let collection = live.collection_view();

        for (k1, k2) in iproduct!(0..=n + 1, 0..=n + 1) {
            for (first, second) in iproduct!(Slice::all(k1), Slice::all(k2)) {
                let steps = [first, second];
                let expected = apply_all(&values, &steps);
                let context = format!("{steps:?} over {n} elements");
                let view = slice(&slice(&live.view(), first), second);
                assert_list_matches(&view, expected, &context);
                assert!(view.depth() <= 3, "{context}: {view:?}");

                let view = slice(&slice(&collection, first), second);
                assert_eq!(view.to_vec().unwrap(), expected, "{context}");
            }
        }
    }
}

#[test]
fn test_exact_slice_grid() {
    for n in 0..=6usize {
        let values: Vec<i32> = (0..n as i32).collect();
        let live = LiveVec::from(values.clone());

        for (k1, k2) in iproduct!(0..=n + 1, 0..=n + 1) {
            for (first, second) in iproduct!(Slice::all(k1), Slice::all(k2)) {
                let context = format!("[{first:?}, {second:?}] exact over {n} elements");
                let intermediate = first.apply(&values);
                let view = slice_exact(&live.view(), first)
                    .and_then(|view| slice_exact(&view, second));
                if k1 > n || k2 > intermediate.len() {
                    assert!(view.is_err(), "{context}");
                } else {
                    let view = view.unwrap();
                    assert_list_matches(&view, second.apply(intermediate), &context);
                }
            }
        }
    }
}

#[test]
fn test_fixed_size_source_is_exact() {
    let source = Rc::new(RefCell::new([10, 11, 12, 13, 14, 15]));
    let base = ListView::over(&source);
    assert_eq!(base.cardinality(), Cardinality::exactly(6));

    for (k1, k2) in iproduct!(0..=7usize, 0..=7usize) {
        for (first, second) in iproduct!(Slice::all(k1), Slice::all(k2)) {
            let expected = apply_all(&[10, 11, 12, 13, 14, 15], &[first, second]).to_vec();
            let view = slice(&slice(&base, first), second);
            assert_eq!(
                view.cardinality(),
                Cardinality::exactly(expected.len()),
                "{first:?}, {second:?}: {view:?}"
            );
            assert_list_matches(&view, &expected, &format!("{first:?}, {second:?}"));
            if expected.is_empty() {
                assert!(view.ptr_eq(&ListView::empty()), "{view:?}");
            }
        }
    }
}
