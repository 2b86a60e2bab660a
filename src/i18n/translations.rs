/// All user-facing strings of the tab strip.
///
/// Fields are grouped by area: action menu, delete confirmation, and the
/// strip's own buttons.
pub struct Translations {
    // --- Action menu ---
    pub menu_title: &'static str,
    pub menu_set_first: &'static str,
    pub menu_rename: &'static str,
    pub menu_copy: &'static str,
    pub menu_duplicate: &'static str,
    pub menu_delete: &'static str,

    // --- Delete confirmation ---
    pub delete_dialog_title: &'static str,
    /// Format string; `{}` is replaced by the page name.
    pub delete_dialog_body: &'static str,
    pub delete_dialog_confirm: &'static str,
    pub delete_dialog_cancel: &'static str,

    // --- Strip buttons ---
    pub add_page: &'static str,
    pub insert_page: &'static str,
    pub scroll_left: &'static str,
    pub scroll_right: &'static str,
}

impl Translations {
    fn fields(&self) -> [&'static str; 14] {
        [
            self.menu_title,
            self.menu_set_first,
            self.menu_rename,
            self.menu_copy,
            self.menu_duplicate,
            self.menu_delete,
            self.delete_dialog_title,
            self.delete_dialog_body,
            self.delete_dialog_confirm,
            self.delete_dialog_cancel,
            self.add_page,
            self.insert_page,
            self.scroll_left,
            self.scroll_right,
        ]
    }

    /// True when no string in the table is empty.
    pub fn all_non_empty(&self) -> bool {
        self.fields().iter().all(|s| !s.is_empty())
    }

    /// Confirmation question for deleting `name`.
    pub fn delete_question(&self, name: &str) -> String {
        self.delete_dialog_body.replacen("{}", name, 1)
    }
}
