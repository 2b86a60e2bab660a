use super::Locale;

const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Picks the locale from the first non-empty variable in `LOCALE_VARS` order.
fn locale_from(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    let first = LOCALE_VARS
        .iter()
        .find_map(|var| lookup(var).filter(|v| !v.is_empty()));
    match first {
        Some(value) if value.starts_with("uk") => Locale::Uk,
        _ => Locale::En,
    }
}

/// Detects the OS locale from the environment, falling back to English.
pub fn detect_locale() -> Locale {
    locale_from(|var| std::env::var(var).ok())
}
