//! Pure layout for the tab strip.
//!
//! Turns the sequence plus transient UI state into a flat row of regions:
//! `gap 0, tab, gap 1, tab, gap 2, ..., tab, gap N`, followed by the
//! "add page" button. Every region is an independent pointer target.

use unicode_width::UnicodeWidthStr;

use crate::config::LayoutConfig;
use crate::core::{DropTarget, PageIcon, PageId, Sequence};

/// Pixel metrics used to size regions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabMetrics {
    pub cell_width: f64,
    pub tab_padding_h: f64,
    pub icon_width: f64,
    pub icon_gap: f64,
    pub menu_button_width: f64,
    pub edge_gap_width: f64,
    pub gap_width: f64,
    pub add_button_width: f64,
    pub min_rename_chars: usize,
}

impl From<&LayoutConfig> for TabMetrics {
    fn from(cfg: &LayoutConfig) -> Self {
        Self {
            cell_width: cfg.cell_width,
            tab_padding_h: cfg.tab_padding_h,
            icon_width: cfg.icon_width,
            icon_gap: cfg.icon_gap,
            menu_button_width: cfg.menu_button_width,
            edge_gap_width: cfg.edge_gap_width,
            gap_width: cfg.gap_width,
            add_button_width: cfg.add_button_width,
            min_rename_chars: cfg.min_rename_chars,
        }
    }
}

impl Default for TabMetrics {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl TabMetrics {
    /// Width of a tab showing `label`.
    pub fn tab_width(&self, label: &str, editing: bool) -> f64 {
        let mut cells = label.width();
        if editing {
            cells = cells.max(self.min_rename_chars);
        }
        self.tab_padding_h * 2.0
            + self.icon_width
            + self.icon_gap
            + cells as f64 * self.cell_width
            + self.icon_gap
            + self.menu_button_width
    }
}

/// Everything about the strip that influences how it is drawn.
#[derive(Clone, Copy, Debug)]
pub struct LayoutInput<'a> {
    pub sequence: &'a Sequence,
    pub active: Option<PageId>,
    /// Page being renamed and the text currently in its field.
    pub editing: Option<(PageId, &'a str)>,
    pub dragging: Option<PageId>,
    pub drop_over: Option<DropTarget>,
    pub hovered_insert: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabRegion {
    pub id: PageId,
    pub label: String,
    pub icon: PageIcon,
    pub x: f64,
    pub width: f64,
    pub active: bool,
    pub editing: bool,
    pub dragging: bool,
    pub drop_hover: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GapRegion {
    pub index: usize,
    pub x: f64,
    pub width: f64,
    pub drop_hover: bool,
    /// Gaps after a tab carry an insert button; the leading edge gap does not.
    pub has_insert_button: bool,
    pub insert_visible: bool,
}

/// A pointer target in the strip.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    Tab(TabRegion),
    Gap(GapRegion),
}

impl Region {
    pub fn x(&self) -> f64 {
        match self {
            Region::Tab(tab) => tab.x,
            Region::Gap(gap) => gap.x,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Region::Tab(tab) => tab.width,
            Region::Gap(gap) => gap.width,
        }
    }

    pub fn center(&self) -> f64 {
        self.x() + self.width() / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.x() && x < self.x() + self.width()
    }

    pub fn drop_target(&self) -> DropTarget {
        match self {
            Region::Tab(tab) => DropTarget::OnItem(tab.id),
            Region::Gap(gap) => DropTarget::OnGap(gap.index),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    pub regions: Vec<Region>,
    pub add_button_x: f64,
    pub add_button_width: f64,
}

impl StripLayout {
    /// Total content width, including the add button.
    pub fn content_width(&self) -> f64 {
        self.add_button_x + self.add_button_width
    }

    pub fn tab(&self, id: PageId) -> Option<&TabRegion> {
        self.regions.iter().find_map(|region| match region {
            Region::Tab(tab) if tab.id == id => Some(tab),
            _ => None,
        })
    }

    pub fn tabs(&self) -> impl Iterator<Item = &TabRegion> {
        self.regions.iter().filter_map(|region| match region {
            Region::Tab(tab) => Some(tab),
            Region::Gap(_) => None,
        })
    }

    pub fn gaps(&self) -> impl Iterator<Item = &GapRegion> {
        self.regions.iter().filter_map(|region| match region {
            Region::Gap(gap) => Some(gap),
            Region::Tab(_) => None,
        })
    }
}

fn gap(index: usize, x: f64, width: f64, input: &LayoutInput<'_>) -> GapRegion {
    let has_insert_button = index > 0;
    GapRegion {
        index,
        x,
        width,
        drop_hover: input.drop_over == Some(DropTarget::OnGap(index)),
        has_insert_button,
        insert_visible: has_insert_button
            && input.dragging.is_none()
            && input.hovered_insert == Some(index),
    }
}

/// Lays out the strip left to right starting at x = 0.
pub fn layout(input: &LayoutInput<'_>, m: &TabMetrics) -> StripLayout {
    let pages = input.sequence.pages();
    let mut regions = Vec::with_capacity(pages.len() * 2 + 1);
    let mut x = 0.0;

    regions.push(Region::Gap(gap(0, x, m.edge_gap_width, input)));
    x += m.edge_gap_width;

    for (i, page) in pages.iter().enumerate() {
        let editing_text = input
            .editing
            .and_then(|(id, text)| (id == page.id).then_some(text));
        let label = editing_text.unwrap_or(page.name.as_str());
        let width = m.tab_width(label, editing_text.is_some());
        regions.push(Region::Tab(TabRegion {
            id: page.id,
            label: label.to_string(),
            icon: page.icon,
            x,
            width,
            active: input.active == Some(page.id),
            editing: editing_text.is_some(),
            dragging: input.dragging == Some(page.id),
            drop_hover: input.drop_over == Some(DropTarget::OnItem(page.id)),
        }));
        x += width;

        regions.push(Region::Gap(gap(i + 1, x, m.gap_width, input)));
        x += m.gap_width;
    }

    StripLayout {
        regions,
        add_button_x: x,
        add_button_width: m.add_button_width,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_layout.rs"]
mod tests;
