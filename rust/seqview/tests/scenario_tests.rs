use seqview::{ErrorKind, ListAdapter, ListView, LiveVec, MutableCollection, MutableList};

#[test]
fn test_chain_reevaluates_after_removal() {
    let source: LiveVec<i32> = (0..6).collect();
    let view = source
        .view()
        .skip_first(1)
        .take_last_exact(2)
        .unwrap()
        .skip_first_exact(1)
        .unwrap();
    // The second check is implied by the first and disappears.
    assert_eq!(
        format!("{view:?}"),
        "SkipFirst(1, TakeLast(2, SkipFirst(1, CountCheck(3, Base))))"
    );
    assert_eq!(view.to_vec().unwrap(), vec![5]);

    source.remove(5);
    assert_eq!(view.to_vec().unwrap(), vec![4]);

    source.truncate(2);
    assert_eq!(
        view.count().unwrap_err().into_kind(),
        ErrorKind::BrokenView {
            required: 3,
            actual: 2
        }
    );
}

#[test]
fn test_exact_window_breaks_after_removal() {
    let source: LiveVec<i32> = (0..6).collect();
    let view = source
        .view()
        .skip_first(1)
        .take_last_exact(5)
        .unwrap()
        .skip_first(2)
        .take_first(1);
    assert_eq!(
        format!("{view:?}"),
        "TakeFirst(1, SkipFirst(2, TakeLast(5, SkipFirst(1, CountCheck(6, Base)))))"
    );
    assert_eq!(view.to_vec().unwrap(), vec![3]);
    assert_eq!(view.get(0).unwrap(), 3);

    source.remove(5);
    assert!(view.to_vec().unwrap_err().is_broken_view());
    assert!(view.first().unwrap_err().is_broken_view());

    source.push(5);
    assert_eq!(view.to_vec().unwrap(), vec![3]);
}

#[test]
fn test_views_follow_inserts_at_both_ends() {
    let source: LiveVec<i32> = (0..6).collect();
    let middle = source.view().skip_first(2).skip_last(2);
    let tail = source.view().take_last(2);
    assert_eq!(middle.to_vec().unwrap(), vec![2, 3]);

    source.insert(0, -1);
    source.push(6);
    assert_eq!(middle.to_vec().unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(tail.to_vec().unwrap(), vec![5, 6]);

    source.clear();
    assert!(middle.is_empty().unwrap());
    assert_eq!(tail.last().unwrap(), None);
}

#[test]
fn test_facade_round_trip_over_live_source() {
    let source: LiveVec<i32> = (0..6).collect();
    let view: ListView<i32> = source.view().skip_last(1).take_last(3);
    let mut facade = view.to_mutable();
    assert!(facade.is_read_only());
    assert_eq!(facade.len().unwrap(), 3);
    assert_eq!(facade.index_of(&4).unwrap(), Some(2));
    assert!(matches!(
        facade.add(1).unwrap_err().into_kind(),
        ErrorKind::ReadOnly { operation: "add" }
    ));
    assert!(facade.into_view().ptr_eq(&view));

    let mut live = ListAdapter::from(source.clone());
    live.remove_at(0).unwrap();
    assert_eq!(view.to_vec().unwrap(), vec![2, 3, 4]);
    assert_eq!(live.view().to_vec().unwrap(), source.to_vec());
}

#[test]
fn test_live_adapter_round_trip_is_identity() {
    let source: LiveVec<i32> = (0..4).collect();
    let adapter = ListAdapter::from(source.clone());
    let view = adapter.view();

    let mut back = view.to_mutable();
    let ListAdapter::Live { source: storage, .. } = &back else {
        panic!("expected the live adapter back");
    };
    assert!(storage.ptr_eq(&source));
    back.add(4).unwrap();
    assert_eq!(view.to_vec().unwrap(), vec![0, 1, 2, 3, 4]);
    assert!(back.into_view().ptr_eq(&view));

    // A slice of the adapted view is a different view and stays read-only.
    let tail = view.skip_first(2).to_mutable();
    assert!(tail.is_read_only());
    assert!(tail.into_view().sub().unwrap().ptr_eq(&view));
}
