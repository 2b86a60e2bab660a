mod detect;
mod en;
mod translations;
mod uk;

use serde::{Deserialize, Serialize};

pub use translations::Translations;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Uk,
}

impl Locale {
    /// All variants in display order.
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Uk];

    /// Returns the static translation table for this locale.
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => en::translations(),
            Locale::Uk => uk::translations(),
        }
    }

    /// Detects the locale from OS environment variables.
    pub fn detect() -> Self {
        detect::detect_locale()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::detect()
    }
}
