use super::translations::Translations;

static UK: Translations = Translations {
    // --- Action menu ---
    menu_title: "Налаштування",
    menu_set_first: "Зробити першою сторінкою",
    menu_rename: "Перейменувати",
    menu_copy: "Копіювати",
    menu_duplicate: "Дублювати",
    menu_delete: "Видалити",

    // --- Delete confirmation ---
    delete_dialog_title: "Видалити сторінку",
    delete_dialog_body: "Ви впевнені, що хочете видалити «{}»? Цю дію неможливо скасувати.",
    delete_dialog_confirm: "Видалити",
    delete_dialog_cancel: "Скасувати",

    // --- Strip buttons ---
    add_page: "Додати сторінку",
    insert_page: "Вставити сторінку",
    scroll_left: "Прокрутити ліворуч",
    scroll_right: "Прокрутити праворуч",
};

pub fn translations() -> &'static Translations {
    &UK
}
