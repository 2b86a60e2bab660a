use super::*;
use crate::core::{Page, PageIcon};

fn three() -> Sequence {
    Sequence::from_pages(vec![
        Page::new(1, "Info", PageIcon::Info),
        Page::new(2, "Details", PageIcon::FileText),
        Page::new(3, "Other", PageIcon::FileText),
    ])
    .unwrap()
}

fn numbered(n: u64) -> Sequence {
    Sequence::from_pages(
        (1..=n)
            .map(|i| Page::new(i, format!("P{i}"), PageIcon::FileText))
            .collect(),
    )
    .unwrap()
}

fn names(seq: &Sequence) -> Vec<&str> {
    seq.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn first_page_dropped_on_last_gap_moves_to_end() {
    let seq = three();
    let next = reorder(&seq, PageId(1), DropTarget::OnGap(3)).unwrap();
    assert_eq!(names(&next), vec!["Details", "Other", "Info"]);
    assert_eq!(next.ids(), vec![PageId(2), PageId(3), PageId(1)]);
}

#[test]
fn last_page_dropped_on_first_page_moves_to_front() {
    let seq = three();
    assert_eq!(
        plan_move(&seq, PageId(3), DropTarget::OnItem(PageId(1))).unwrap(),
        Some(Move { from: 2, to: 0 })
    );
    let next = reorder(&seq, PageId(3), DropTarget::OnItem(PageId(1))).unwrap();
    assert_eq!(names(&next), vec!["Other", "Info", "Details"]);
}

#[test]
fn dropping_forward_on_item_lands_before_it() {
    let seq = three();
    let next = reorder(&seq, PageId(1), DropTarget::OnItem(PageId(3))).unwrap();
    assert_eq!(names(&next), vec!["Details", "Info", "Other"]);
}

#[test]
fn self_drop_is_noop() {
    let seq = numbered(5);
    for id in seq.ids() {
        assert_eq!(plan_move(&seq, id, DropTarget::OnItem(id)).unwrap(), None);
        assert_eq!(reorder(&seq, id, DropTarget::OnItem(id)).unwrap(), seq);
    }
}

#[test]
fn adjacent_gap_drops_resolve_to_noop() {
    let seq = numbered(5);
    for (index, id) in seq.ids().into_iter().enumerate() {
        assert_eq!(plan_move(&seq, id, DropTarget::OnGap(index)).unwrap(), None);

        let after = plan_move(&seq, id, DropTarget::OnGap(index + 1)).unwrap();
        assert!(after.is_some_and(Move::is_noop), "gap after {index}: {after:?}");
        assert_eq!(reorder(&seq, id, DropTarget::OnGap(index + 1)).unwrap(), seq);
    }
}

#[test]
fn missing_source_is_an_error() {
    let seq = three();
    assert_eq!(
        reorder(&seq, PageId(9), DropTarget::OnGap(0)).unwrap_err(),
        ReorderError::SourceNotFound(PageId(9))
    );
}

#[test]
fn missing_target_leaves_sequence_unchanged() {
    let seq = three();
    assert_eq!(
        reorder(&seq, PageId(1), DropTarget::OnItem(PageId(9))).unwrap(),
        seq
    );
    assert_eq!(reorder(&seq, PageId(1), DropTarget::OnGap(4)).unwrap(), seq);
}

#[test]
fn reorder_preserves_ids_and_length() {
    let seq = numbered(6);
    let mut expected = seq.ids();
    expected.sort();
    for source in seq.ids() {
        for gap in 0..=seq.len() {
            let next = reorder(&seq, source, DropTarget::OnGap(gap)).unwrap();
            assert_eq!(next.len(), seq.len());
            let mut got = next.ids();
            got.sort();
            assert_eq!(got, expected);
        }
        for target in seq.ids() {
            let next = reorder(&seq, source, DropTarget::OnItem(target)).unwrap();
            assert_eq!(next.len(), seq.len());
        }
    }
}

#[test]
fn inverse_drop_restores_original_order() {
    let seq = numbered(6);
    for (from, source) in seq.ids().into_iter().enumerate() {
        for gap in 0..=seq.len() {
            let moved = reorder(&seq, source, DropTarget::OnGap(gap)).unwrap();
            let now = moved.index_of(source).unwrap();
            let back_gap = if from > now { from + 1 } else { from };
            let restored = reorder(&moved, source, DropTarget::OnGap(back_gap)).unwrap();
            assert_eq!(restored, seq, "from {from} via gap {gap}");
        }
    }
}
