//! Inline rename: the `Idle -> Editing -> Idle` session and its text buffer.

use crate::core::{Page, PageId};

/// Editing keys understood by the rename field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    SelectAll,
}

/// Modifier state accompanying an [`EditKey`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditModifiers {
    /// Extend the selection instead of collapsing it.
    pub shift: bool,
    /// Move or delete by word (Ctrl on Linux/Windows, Alt on macOS).
    pub word: bool,
}

/// What the caller should do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameOutcome {
    Continue,
    Commit,
    Cancel,
}

/// Text being edited, with a byte cursor that always sits on a char boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameBuffer {
    pub text: String,
    pub cursor: usize,
    pub selection_anchor: Option<usize>,
}

fn selected_range(anchor: Option<usize>, cursor: usize) -> Option<(usize, usize)> {
    let anchor = anchor?;
    if anchor == cursor {
        None
    } else {
        Some((anchor.min(cursor), anchor.max(cursor)))
    }
}

fn prev_char_boundary(s: &str, idx: usize) -> usize {
    let idx = idx.min(s.len());
    s[..idx].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, idx: usize) -> usize {
    let idx = idx.min(s.len());
    if idx >= s.len() {
        return s.len();
    }
    idx + s[idx..].chars().next().map_or(0, char::len_utf8)
}

fn char_at(s: &str, start: usize, end: usize) -> char {
    s[start..end].chars().next().unwrap_or(' ')
}

fn word_left_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());
    while idx > 0 {
        let prev = prev_char_boundary(s, idx);
        if !char_at(s, prev, idx).is_whitespace() {
            break;
        }
        idx = prev;
    }
    while idx > 0 {
        let prev = prev_char_boundary(s, idx);
        if char_at(s, prev, idx).is_whitespace() {
            break;
        }
        idx = prev;
    }
    idx
}

fn word_right_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());
    while idx < s.len() {
        let next = next_char_boundary(s, idx);
        if !char_at(s, idx, next).is_whitespace() {
            break;
        }
        idx = next;
    }
    while idx < s.len() {
        let next = next_char_boundary(s, idx);
        if char_at(s, idx, next).is_whitespace() {
            break;
        }
        idx = next;
    }
    idx
}

impl RenameBuffer {
    /// Buffer holding `text` with everything selected, as a freshly focused field.
    pub fn selecting_all(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
            selection_anchor: Some(0),
        }
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        selected_range(self.selection_anchor, self.cursor)
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            return false;
        };
        self.text.replace_range(start..end, "");
        self.cursor = start;
        self.selection_anchor = None;
        true
    }

    /// Types `s` at the cursor, replacing any selection. Control characters are dropped.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() || s.chars().any(char::is_control) {
            return;
        }
        self.delete_selection();
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.selection_anchor = None;
    }

    fn move_cursor(&mut self, target: usize, shift: bool) {
        if shift {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor = target;
    }

    /// Applies an editing key. Enter is refused while the trimmed text is blank.
    pub fn handle_key(&mut self, key: EditKey, mods: EditModifiers) -> RenameOutcome {
        match key {
            EditKey::Enter if self.text.trim().is_empty() => RenameOutcome::Continue,
            EditKey::Enter => RenameOutcome::Commit,
            EditKey::Escape => RenameOutcome::Cancel,
            EditKey::SelectAll => {
                self.selection_anchor = Some(0);
                self.cursor = self.text.len();
                RenameOutcome::Continue
            }
            EditKey::Home => {
                self.move_cursor(0, mods.shift);
                RenameOutcome::Continue
            }
            EditKey::End => {
                self.move_cursor(self.text.len(), mods.shift);
                RenameOutcome::Continue
            }
            EditKey::Left => {
                if !mods.shift
                    && let Some((start, _)) = self.selection()
                {
                    self.move_cursor(start, false);
                } else {
                    let target = if mods.word {
                        word_left_boundary(&self.text, self.cursor)
                    } else {
                        prev_char_boundary(&self.text, self.cursor)
                    };
                    self.move_cursor(target, mods.shift);
                }
                RenameOutcome::Continue
            }
            EditKey::Right => {
                if !mods.shift
                    && let Some((_, end)) = self.selection()
                {
                    self.move_cursor(end, false);
                } else {
                    let target = if mods.word {
                        word_right_boundary(&self.text, self.cursor)
                    } else {
                        next_char_boundary(&self.text, self.cursor)
                    };
                    self.move_cursor(target, mods.shift);
                }
                RenameOutcome::Continue
            }
            EditKey::Backspace => {
                if !self.delete_selection() {
                    let start = if mods.word {
                        word_left_boundary(&self.text, self.cursor)
                    } else {
                        prev_char_boundary(&self.text, self.cursor)
                    };
                    if start < self.cursor {
                        self.text.replace_range(start..self.cursor, "");
                        self.cursor = start;
                    }
                    self.selection_anchor = None;
                }
                RenameOutcome::Continue
            }
            EditKey::Delete => {
                if !self.delete_selection() {
                    let end = if mods.word {
                        word_right_boundary(&self.text, self.cursor)
                    } else {
                        next_char_boundary(&self.text, self.cursor)
                    };
                    if end > self.cursor {
                        self.text.replace_range(self.cursor..end, "");
                    }
                    self.selection_anchor = None;
                }
                RenameOutcome::Continue
            }
        }
    }
}

/// At most one page is being renamed at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RenameSession {
    #[default]
    Idle,
    Editing { page: PageId, buffer: RenameBuffer },
}

impl RenameSession {
    /// Starts editing `page`. An edit already running on another page is
    /// cancelled; its id is returned.
    pub fn begin(&mut self, page: &Page) -> Option<PageId> {
        let previous = match self {
            RenameSession::Editing { page: prev, .. } if *prev != page.id => Some(*prev),
            _ => None,
        };
        *self = RenameSession::Editing {
            page: page.id,
            buffer: RenameBuffer::selecting_all(&page.name),
        };
        previous
    }

    pub fn editing_page(&self) -> Option<PageId> {
        match self {
            RenameSession::Idle => None,
            RenameSession::Editing { page, .. } => Some(*page),
        }
    }

    pub fn buffer(&self) -> Option<&RenameBuffer> {
        match self {
            RenameSession::Idle => None,
            RenameSession::Editing { buffer, .. } => Some(buffer),
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut RenameBuffer> {
        match self {
            RenameSession::Idle => None,
            RenameSession::Editing { buffer, .. } => Some(buffer),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RenameSession::Editing { .. })
    }

    /// Ends the session and returns the page with its trimmed new name.
    /// A blank buffer yields `None`: the rename is discarded.
    pub fn commit(&mut self) -> Option<(PageId, String)> {
        match std::mem::take(self) {
            RenameSession::Editing { page, buffer } => {
                let trimmed = buffer.text.trim();
                (!trimmed.is_empty()).then(|| (page, trimmed.to_string()))
            }
            RenameSession::Idle => None,
        }
    }

    /// Ends the session without touching the page. Returns the page that was edited.
    pub fn cancel(&mut self) -> Option<PageId> {
        let page = self.editing_page();
        *self = RenameSession::Idle;
        page
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_rename.rs"]
mod tests;
