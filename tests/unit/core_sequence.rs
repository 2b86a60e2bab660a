use super::*;

fn abc() -> Sequence {
    Sequence::from_pages(vec![
        Page::new(1, "A", PageIcon::Info),
        Page::new(2, "B", PageIcon::FileText),
        Page::new(3, "C", PageIcon::Check),
    ])
    .unwrap()
}

fn ids(seq: &Sequence) -> Vec<u64> {
    seq.iter().map(|p| p.id.0).collect()
}

#[test]
fn initial_sequence_has_six_unique_pages() {
    let seq = Sequence::initial();
    assert_eq!(seq.len(), 6);
    assert_eq!(ids(&seq), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(seq.first().map(|p| p.name.as_str()), Some("Info"));
}

#[test]
fn from_pages_rejects_duplicate_ids() {
    let err = Sequence::from_pages(vec![
        Page::new(1, "A", PageIcon::Info),
        Page::new(1, "B", PageIcon::Info),
    ])
    .unwrap_err();
    assert_eq!(err, SequenceError::DuplicateId(PageId(1)));
}

#[test]
fn insert_at_clamps_index() {
    let mut seq = abc();
    seq.insert_at(99, Page::new(4, "D", PageIcon::FileText)).unwrap();
    assert_eq!(ids(&seq), vec![1, 2, 3, 4]);
}

#[test]
fn remove_missing_page_is_not_found() {
    let mut seq = abc();
    assert_eq!(
        seq.remove_by_id(PageId(9)).unwrap_err(),
        SequenceError::NotFound(PageId(9))
    );
    assert_eq!(ids(&seq), vec![1, 2, 3]);
}

#[test]
fn remove_last_page_fails_and_keeps_sequence() {
    let mut seq = Sequence::from_pages(vec![Page::new(7, "Only", PageIcon::Info)]).unwrap();
    assert_eq!(seq.remove_by_id(PageId(7)).unwrap_err(), SequenceError::LastItem);
    assert_eq!(ids(&seq), vec![7]);
}

#[test]
fn remove_returns_former_index() {
    let mut seq = abc();
    let (index, page) = seq.remove_by_id(PageId(2)).unwrap();
    assert_eq!(index, 1);
    assert_eq!(page.name, "B");
    assert_eq!(ids(&seq), vec![1, 3]);
}

#[test]
fn rename_trims_and_rejects_blank() {
    let mut seq = abc();
    seq.rename_by_id(PageId(1), "  Intro ").unwrap();
    assert_eq!(seq.get(PageId(1)).unwrap().name, "Intro");

    assert_eq!(
        seq.rename_by_id(PageId(1), "   ").unwrap_err(),
        SequenceError::InvalidName
    );
    assert_eq!(seq.get(PageId(1)).unwrap().name, "Intro");

    assert_eq!(
        seq.rename_by_id(PageId(42), "x").unwrap_err(),
        SequenceError::NotFound(PageId(42))
    );
}

#[test]
fn move_to_front_reports_noop_for_first() {
    let mut seq = abc();
    assert_eq!(seq.move_to_front(PageId(1)), Ok(false));
    assert_eq!(seq.move_to_front(PageId(3)), Ok(true));
    assert_eq!(ids(&seq), vec![3, 1, 2]);
}

#[test]
fn reorder_out_of_range_is_ignored() {
    let mut seq = abc();
    assert!(!seq.reorder(0, 3));
    assert!(!seq.reorder(5, 0));
    assert_eq!(ids(&seq), vec![1, 2, 3]);
    assert!(seq.reorder(0, 2));
    assert_eq!(ids(&seq), vec![2, 3, 1]);
}
