use super::translations::Translations;

static EN: Translations = Translations {
    // --- Action menu ---
    menu_title: "Settings",
    menu_set_first: "Set as first page",
    menu_rename: "Rename",
    menu_copy: "Copy",
    menu_duplicate: "Duplicate",
    menu_delete: "Delete",

    // --- Delete confirmation ---
    delete_dialog_title: "Delete Page",
    delete_dialog_body: "Are you sure you want to delete \"{}\"? This action cannot be undone.",
    delete_dialog_confirm: "Delete",
    delete_dialog_cancel: "Cancel",

    // --- Strip buttons ---
    add_page: "Add page",
    insert_page: "Insert page",
    scroll_left: "Scroll left",
    scroll_right: "Scroll right",
};

pub fn translations() -> &'static Translations {
    &EN
}
