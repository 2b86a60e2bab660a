use super::*;
use crate::core::PageIcon;

const NONE: EditModifiers = EditModifiers {
    shift: false,
    word: false,
};
const SHIFT: EditModifiers = EditModifiers {
    shift: true,
    word: false,
};
const WORD: EditModifiers = EditModifiers {
    shift: false,
    word: true,
};

fn page(id: u64, name: &str) -> Page {
    Page::new(id, name, PageIcon::FileText)
}

#[test]
fn selected_range_returns_ordered_bounds() {
    assert_eq!(selected_range(None, 3), None);
    assert_eq!(selected_range(Some(2), 2), None);
    assert_eq!(selected_range(Some(5), 2), Some((2, 5)));
}

#[test]
fn char_boundaries_handle_utf8() {
    let s = "aĞ±🙂z";
    let z = s.len();
    let last = prev_char_boundary(s, z);
    let smile = prev_char_boundary(s, last);

    assert_eq!(&s[last..z], "z");
    assert_eq!(&s[smile..last], "🙂");
    assert_eq!(next_char_boundary(s, smile), last);
}

#[test]
fn word_boundaries_skip_surrounding_whitespace() {
    let s = "one   two three";
    let idx = s.find("two").unwrap_or(0);
    let right = word_right_boundary(s, idx);
    let left = word_left_boundary(s, right);

    assert_eq!(&s[idx..right], "two");
    assert_eq!(left, idx);
}

#[test]
fn begin_selects_whole_name_and_typing_replaces_it() {
    let mut session = RenameSession::default();
    assert_eq!(session.begin(&page(1, "Info")), None);

    let buffer = session.buffer_mut().unwrap();
    assert_eq!(buffer.selection(), Some((0, 4)));
    buffer.insert_str("Intro");
    assert_eq!(buffer.text, "Intro");
    assert_eq!(buffer.cursor, 5);
    assert_eq!(buffer.selection(), None);
}

#[test]
fn control_characters_are_not_inserted() {
    let mut buffer = RenameBuffer::selecting_all("");
    buffer.insert_str("\u{7}");
    buffer.insert_str("");
    assert_eq!(buffer.text, "");
}

#[test]
fn arrows_collapse_selection_before_moving() {
    let mut buffer = RenameBuffer::selecting_all("Details");
    buffer.handle_key(EditKey::Left, NONE);
    assert_eq!(buffer.cursor, 0);
    assert_eq!(buffer.selection(), None);

    buffer.handle_key(EditKey::Right, NONE);
    assert_eq!(buffer.cursor, 1);
    buffer.handle_key(EditKey::End, SHIFT);
    assert_eq!(buffer.selection(), Some((1, 7)));
    buffer.handle_key(EditKey::Right, NONE);
    assert_eq!(buffer.cursor, 7);
}

#[test]
fn word_backspace_removes_previous_word() {
    let mut buffer = RenameBuffer::selecting_all("Final Page");
    buffer.handle_key(EditKey::End, NONE);
    buffer.handle_key(EditKey::Backspace, WORD);
    assert_eq!(buffer.text, "Final ");
    buffer.handle_key(EditKey::Backspace, NONE);
    assert_eq!(buffer.text, "Final");
}

#[test]
fn delete_forward_removes_next_char() {
    let mut buffer = RenameBuffer::selecting_all("Other");
    buffer.handle_key(EditKey::Home, NONE);
    buffer.handle_key(EditKey::Delete, NONE);
    assert_eq!(buffer.text, "ther");
    buffer.handle_key(EditKey::Delete, WORD);
    assert_eq!(buffer.text, "");
    assert_eq!(buffer.cursor, 0);
}

#[test]
fn enter_on_blank_text_keeps_editing() {
    let mut buffer = RenameBuffer::selecting_all("   ");
    assert_eq!(buffer.handle_key(EditKey::Enter, NONE), RenameOutcome::Continue);
    buffer.insert_str("x");
    assert_eq!(buffer.handle_key(EditKey::Enter, NONE), RenameOutcome::Commit);
    assert_eq!(buffer.handle_key(EditKey::Escape, NONE), RenameOutcome::Cancel);
}

#[test]
fn commit_trims_and_returns_to_idle() {
    let mut session = RenameSession::default();
    session.begin(&page(2, "Details"));
    session.buffer_mut().unwrap().insert_str("  More  ");
    assert_eq!(session.commit(), Some((PageId(2), "More".to_string())));
    assert_eq!(session, RenameSession::Idle);
}

#[test]
fn whitespace_commit_is_discarded() {
    let mut session = RenameSession::default();
    session.begin(&page(2, "Details"));
    session.buffer_mut().unwrap().insert_str("  ");
    assert_eq!(session.commit(), None);
    assert!(!session.is_editing());
}

#[test]
fn beginning_another_rename_cancels_the_previous_one() {
    let mut session = RenameSession::default();
    session.begin(&page(1, "Info"));
    session.buffer_mut().unwrap().insert_str("Changed");
    assert_eq!(session.begin(&page(3, "Other")), Some(PageId(1)));
    assert_eq!(session.editing_page(), Some(PageId(3)));
    assert_eq!(session.buffer().unwrap().text, "Other");
}

#[test]
fn cancel_reports_edited_page() {
    let mut session = RenameSession::default();
    assert_eq!(session.cancel(), None);
    session.begin(&page(4, "Ending"));
    assert_eq!(session.cancel(), Some(PageId(4)));
    assert_eq!(session.commit(), None);
}
