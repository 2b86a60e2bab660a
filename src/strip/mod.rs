//! The tab strip controller and its widgets.
//!
//! [`TabStrip`] owns the page sequence and all transient UI state. Embedders
//! feed it discrete input events (click, drag, key, blur) and read back a
//! [`StripLayout`] to draw plus a queue of [`StripEvent`]s.

mod clipboard;
mod delete;
mod drag;
mod gestures;
mod intents;
mod layout;
mod menu;
mod rename;
mod viewport;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard, copy_page, page_payload};
pub use delete::{DeleteConfirm, DeleteResolution};
pub use drag::{DragError, DragSession, DropRequest};
pub use hit_test::{StripHit, closest_center, hit_test};
pub use layout::{GapRegion, LayoutInput, Region, StripLayout, TabMetrics, TabRegion, layout};
pub use menu::{MenuAction, MenuItem, TabMenu};
pub use rename::{EditKey, EditModifiers, RenameBuffer, RenameOutcome, RenameSession};
pub use viewport::{MemoryViewport, ScrollArrows, Viewport, centered_scroll_offset};

use crate::config::{ScrollConfig, StripConfig};
use crate::core::{IdAllocator, PageFactory, PageId, Sequence, SequenceError};
use crate::i18n::Translations;

/// Intents reported to the embedder, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StripEvent {
    Activated(PageId),
    Renamed { page: PageId, name: String },
    Copied(PageId),
    Duplicated { source: PageId, copy: PageId },
    Inserted { page: PageId, index: usize },
    Deleted(PageId),
    Reordered { page: PageId, from: usize, to: usize },
    MovedToFront(PageId),
}

pub struct TabStrip<V = MemoryViewport, C = MemoryClipboard> {
    pages: Sequence,
    factory: PageFactory,
    active: PageId,
    rename: RenameSession,
    drag: DragSession,
    delete: DeleteConfirm,
    menu: Option<TabMenu>,
    hovered_insert: Option<usize>,
    arrows: ScrollArrows,
    metrics: TabMetrics,
    scroll: ScrollConfig,
    translations: &'static Translations,
    viewport: V,
    clipboard: C,
    pending_events: Vec<StripEvent>,
}

impl<V: Viewport, C: ClipboardSink> TabStrip<V, C> {
    /// Creates a strip over `pages`; the first page starts active.
    pub fn new(
        pages: Sequence,
        config: &StripConfig,
        viewport: V,
        clipboard: C,
    ) -> Result<Self, SequenceError> {
        let active = pages.first().ok_or(SequenceError::Empty)?.id;
        Ok(Self::assemble(pages, active, config, viewport, clipboard))
    }

    /// Strip over the fixed initial page set, with its first page active.
    pub fn with_initial_pages(config: &StripConfig, viewport: V, clipboard: C) -> Self {
        Self::assemble(Sequence::initial(), PageId(1), config, viewport, clipboard)
    }

    fn assemble(
        pages: Sequence,
        active: PageId,
        config: &StripConfig,
        viewport: V,
        clipboard: C,
    ) -> Self {
        let factory = PageFactory::new(
            IdAllocator::after(&pages),
            &config.pages.name_prefix,
            &config.pages.copy_suffix,
        );
        let mut strip = Self {
            pages,
            factory,
            active,
            rename: RenameSession::default(),
            drag: DragSession::default(),
            delete: DeleteConfirm::default(),
            menu: None,
            hovered_insert: None,
            arrows: ScrollArrows::default(),
            metrics: TabMetrics::from(&config.layout),
            scroll: config.scroll.clone(),
            translations: config.locale.translations(),
            viewport,
            clipboard,
            pending_events: Vec::new(),
        };
        strip.refresh_scroll_state();
        strip
    }

    pub fn pages(&self) -> &Sequence {
        &self.pages
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn rename_session(&self) -> &RenameSession {
        &self.rename
    }

    pub fn editing(&self) -> Option<PageId> {
        self.rename.editing_page()
    }

    pub fn dragging(&self) -> Option<PageId> {
        self.drag.source()
    }

    pub fn menu(&self) -> Option<&TabMenu> {
        self.menu.as_ref()
    }

    pub fn pending_delete(&self) -> Option<PageId> {
        self.delete.pending()
    }

    pub fn hovered_insert(&self) -> Option<usize> {
        self.hovered_insert
    }

    pub fn arrows(&self) -> ScrollArrows {
        self.arrows
    }

    pub fn translations(&self) -> &'static Translations {
        self.translations
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Deleting is offered only while more than one page exists.
    pub fn can_delete(&self) -> bool {
        self.pages.len() > 1
    }

    /// Drains the intents queued since the last call.
    pub fn take_events(&mut self) -> Vec<StripEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Current render contract.
    pub fn layout(&self) -> StripLayout {
        let input = LayoutInput {
            sequence: &self.pages,
            active: Some(self.active),
            editing: match &self.rename {
                RenameSession::Editing { page, buffer } => Some((*page, buffer.text.as_str())),
                RenameSession::Idle => None,
            },
            dragging: self.drag.source(),
            drop_over: self.drag.over(),
            hovered_insert: self.hovered_insert,
        };
        layout(&input, &self.metrics)
    }

    /// Re-measures content width and scroll-arrow visibility.
    pub fn refresh_scroll_state(&mut self) {
        let width = self.layout().content_width();
        self.viewport.content_resized(width);
        self.arrows = ScrollArrows::measure(&self.viewport, self.scroll.overflow_epsilon);
    }

    /// Scrolls so that `page` sits in the middle of the viewport.
    fn reveal(&mut self, page: PageId) {
        let layout = self.layout();
        self.viewport.content_resized(layout.content_width());
        if let Some(tab) = layout.tab(page) {
            let offset = centered_scroll_offset(
                tab.x,
                tab.width,
                self.viewport.client_width(),
                self.viewport.scroll_width(),
            );
            self.viewport.scroll_to(offset);
        }
        self.arrows = ScrollArrows::measure(&self.viewport, self.scroll.overflow_epsilon);
    }

    fn set_active(&mut self, page: PageId) {
        if self.active != page {
            self.active = page;
            self.pending_events.push(StripEvent::Activated(page));
        }
        self.reveal(page);
    }

    /// True while a menu or delete confirmation captures the pointer.
    fn overlay_open(&self) -> bool {
        self.menu.is_some() || self.delete.pending().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_controller.rs"]
mod tests;
