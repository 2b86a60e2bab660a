use super::*;
use crate::core::{self, SequenceError};

impl<V: Viewport, C: ClipboardSink> TabStrip<V, C> {
    /// Closes an open menu or delete confirmation. Returns `true` if one was open.
    pub fn dismiss_overlays(&mut self) -> bool {
        let had_menu = self.menu.take().is_some();
        let had_dialog = self.delete.cancel().is_some();
        had_menu || had_dialog
    }

    /// Single click on a tab: activates it.
    ///
    /// Ignored while dragging or while the tab's own name is being edited.
    /// A click while a menu or dialog is open only dismisses it.
    pub fn click(&mut self, page: PageId) {
        if self.drag.is_dragging() || self.dismiss_overlays() {
            return;
        }
        if self.rename.editing_page() == Some(page) {
            return;
        }
        if !self.pages.contains(page) {
            log::debug!("click on unknown page {page} ignored");
            return;
        }
        // The rename field loses focus when another tab is clicked.
        self.blur_rename();
        self.set_active(page);
    }

    /// Double click on a tab: activates it and starts renaming.
    ///
    /// A rename running on another page is cancelled, not committed.
    pub fn double_click(&mut self, page: PageId) {
        if self.drag.is_dragging()
            || self.overlay_open()
            || self.rename.editing_page() == Some(page)
        {
            return;
        }
        self.cancel_rename_elsewhere(page);
        self.click(page);
        self.start_rename(page);
    }

    /// Opens the action menu of `page`, activating it.
    pub fn open_menu(&mut self, page: PageId) {
        if self.drag.is_dragging() || !self.pages.contains(page) {
            return;
        }
        self.delete.cancel();
        self.cancel_rename_elsewhere(page);
        self.blur_rename();
        self.set_active(page);
        self.menu = Some(TabMenu::build(page, self.can_delete(), self.translations));
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Runs `action` from the open menu. Disabled or absent items do nothing.
    pub fn choose(&mut self, action: MenuAction) {
        let Some(menu) = self.menu.take() else {
            return;
        };
        if !menu.is_enabled(action) {
            log::debug!("menu action {action:?} is disabled for page {}", menu.page);
            return;
        }
        match action {
            MenuAction::SetAsFirst => self.set_as_first(menu.page),
            MenuAction::Rename => self.start_rename(menu.page),
            MenuAction::Copy => {
                self.copy(menu.page);
            }
            MenuAction::Duplicate => self.duplicate(menu.page),
            MenuAction::Delete => {
                self.request_delete(menu.page);
            }
        }
    }

    pub fn set_as_first(&mut self, page: PageId) {
        match core::set_as_first(&mut self.pages, page) {
            Ok(true) => {
                self.pending_events.push(StripEvent::MovedToFront(page));
                self.refresh_scroll_state();
            }
            Ok(false) => {}
            Err(err) => log::debug!("set as first ignored: {err}"),
        }
    }

    // ── Rename ───────────────────────────────────────────────────────

    /// Enters rename mode for `page` with its current name selected.
    pub fn start_rename(&mut self, page: PageId) {
        let Some(target) = self.pages.get(page) else {
            log::debug!("rename of unknown page {page} ignored");
            return;
        };
        if let Some(previous) = self.rename.begin(target) {
            log::debug!("rename of page {previous} cancelled by rename of {page}");
        }
        self.refresh_scroll_state();
    }

    /// Types text into the rename field.
    pub fn rename_input(&mut self, text: &str) {
        if let Some(buffer) = self.rename.buffer_mut() {
            buffer.insert_str(text);
            self.refresh_scroll_state();
        }
    }

    /// Feeds an editing key to the rename field. Returns `false` when no rename is active.
    pub fn rename_key(&mut self, key: EditKey, mods: EditModifiers) -> bool {
        let Some(buffer) = self.rename.buffer_mut() else {
            return false;
        };
        match buffer.handle_key(key, mods) {
            RenameOutcome::Continue => self.refresh_scroll_state(),
            RenameOutcome::Commit => self.commit_rename(),
            RenameOutcome::Cancel => self.cancel_rename(),
        }
        true
    }

    /// Leaves rename mode, applying the trimmed buffer if it is not blank.
    pub fn commit_rename(&mut self) {
        if let Some((page, name)) = self.rename.commit() {
            match self.pages.rename_by_id(page, &name) {
                Ok(()) => self.pending_events.push(StripEvent::Renamed { page, name }),
                Err(err) => log::debug!("rename of page {page} dropped: {err}"),
            }
        }
        self.refresh_scroll_state();
    }

    pub fn cancel_rename(&mut self) {
        if self.rename.cancel().is_some() {
            self.refresh_scroll_state();
        }
    }

    fn cancel_rename_elsewhere(&mut self, page: PageId) {
        if self.rename.editing_page().is_some_and(|editing| editing != page) {
            self.cancel_rename();
        }
    }

    /// Focus left the rename field.
    pub fn blur_rename(&mut self) {
        if self.rename.is_editing() {
            self.commit_rename();
        }
    }

    // ── Copy / duplicate / insert ────────────────────────────────────

    /// Writes the page's name and icon to the clipboard. Failures are ignored.
    pub fn copy(&mut self, page: PageId) -> bool {
        let Some(target) = self.pages.get(page) else {
            return false;
        };
        let copied = copy_page(&mut self.clipboard, target);
        if copied {
            self.pending_events.push(StripEvent::Copied(page));
        }
        copied
    }

    pub fn duplicate(&mut self, page: PageId) {
        match core::duplicate_page(&mut self.pages, page, &mut self.factory) {
            Ok(copy) => {
                self.pending_events.push(StripEvent::Duplicated { source: page, copy });
                self.set_active(copy);
            }
            Err(err) => log::debug!("duplicate ignored: {err}"),
        }
    }

    /// Inserts a new page into gap `index` and activates it.
    pub fn insert_at_gap(&mut self, index: usize) -> Option<PageId> {
        if self.drag.is_dragging() {
            return None;
        }
        let page = core::insert_new_page(&mut self.pages, index, &mut self.factory);
        self.hovered_insert = None;
        self.announce_insert(page);
        Some(page)
    }

    /// "Add page" button: appends a new page and activates it.
    pub fn add_page(&mut self) -> PageId {
        let page = core::append_new_page(&mut self.pages, &mut self.factory);
        self.announce_insert(page);
        page
    }

    fn announce_insert(&mut self, page: PageId) {
        let index = self.pages.index_of(page).unwrap_or_default();
        self.pending_events.push(StripEvent::Inserted { page, index });
        self.set_active(page);
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Opens the delete confirmation for `page`.
    ///
    /// Refused while only one page exists or a drag is in progress.
    pub fn request_delete(&mut self, page: PageId) -> bool {
        if self.drag.is_dragging() || !self.can_delete() || !self.pages.contains(page) {
            return false;
        }
        self.menu = None;
        self.delete.request(page);
        true
    }

    /// Confirms the pending delete. Returns the removed page id on success.
    pub fn confirm_delete(&mut self) -> Option<PageId> {
        let DeleteResolution::Confirmed(page) = self.delete.confirm()? else {
            return None;
        };
        match self.delete_page(page) {
            Ok(()) => Some(page),
            Err(err) => {
                log::debug!("delete of page {page} refused: {err}");
                None
            }
        }
    }

    /// Cancel button, Escape, or focus leaving the confirmation.
    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    fn delete_page(&mut self, page: PageId) -> Result<(), SequenceError> {
        self.pages.remove_by_id(page)?;

        if self.rename.editing_page() == Some(page) {
            self.rename.cancel();
        }
        if self.drag.source() == Some(page) {
            self.drag.cancel();
        }
        if self.menu.as_ref().is_some_and(|m| m.page == page) {
            self.menu = None;
        }
        self.hovered_insert = None;
        self.pending_events.push(StripEvent::Deleted(page));

        if self.active == page {
            if let Some(first) = self.pages.first().map(|p| p.id) {
                self.set_active(first);
            }
        } else {
            self.refresh_scroll_state();
        }
        Ok(())
    }
}
