use crate::core::PageId;
use crate::i18n::Translations;

/// Actions offered by a tab's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetAsFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub action: MenuAction,
    pub label: &'static str,
    pub enabled: bool,
}

/// An open action menu, anchored to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabMenu {
    pub page: PageId,
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

impl TabMenu {
    /// Builds the menu for `page`. Delete is disabled when it would remove the last page.
    pub fn build(page: PageId, can_delete: bool, t: &'static Translations) -> Self {
        let item = |action, label, enabled| MenuItem {
            action,
            label,
            enabled,
        };
        Self {
            page,
            title: t.menu_title,
            items: vec![
                item(MenuAction::SetAsFirst, t.menu_set_first, true),
                item(MenuAction::Rename, t.menu_rename, true),
                item(MenuAction::Copy, t.menu_copy, true),
                item(MenuAction::Duplicate, t.menu_duplicate, true),
                item(MenuAction::Delete, t.menu_delete, can_delete),
            ],
        }
    }

    pub fn is_enabled(&self, action: MenuAction) -> bool {
        self.items
            .iter()
            .any(|item| item.action == action && item.enabled)
    }
}
