use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub layout: LayoutConfig,
    pub scroll: ScrollConfig,
    pub pages: PageConfig,
    pub locale: Locale,
}

/// Region sizes in logical pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub cell_width: f64,
    pub tab_padding_h: f64,
    pub icon_width: f64,
    pub icon_gap: f64,
    pub menu_button_width: f64,
    pub edge_gap_width: f64,
    pub gap_width: f64,
    pub add_button_width: f64,
    /// Minimum width of the rename field, in cells.
    pub min_rename_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            tab_padding_h: 10.0,
            icon_width: 16.0,
            icon_gap: 8.0,
            menu_button_width: 20.0,
            edge_gap_width: 8.0,
            gap_width: 48.0,
            add_button_width: 96.0,
            min_rename_chars: 8,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance scrolled by one click on an arrow button.
    pub step: f64,
    /// Slack before the right arrow is shown.
    pub overflow_epsilon: f64,
    /// Visible width of the strip when no host viewport is attached.
    pub client_width: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            step: 200.0,
            overflow_epsilon: 1.0,
            client_width: 640.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// New pages are named `"{name_prefix} {n}"`.
    pub name_prefix: String,
    /// Appended to the source name of a duplicate.
    pub copy_suffix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            name_prefix: "Page".to_string(),
            copy_suffix: " Copy".to_string(),
        }
    }
}
