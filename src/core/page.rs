use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, unique identifier of a page for the lifetime of a strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display tag for the icon drawn in front of a page name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageIcon {
    Info,
    #[default]
    FileText,
    Check,
}

impl PageIcon {
    /// Single-cell glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            PageIcon::Info => 'i',
            PageIcon::FileText => '≡',
            PageIcon::Check => '✓',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub icon: PageIcon,
}

impl Page {
    pub fn new(id: u64, name: impl Into<String>, icon: PageIcon) -> Self {
        Self {
            id: PageId(id),
            name: name.into(),
            icon,
        }
    }
}
