use super::*;
use crate::core::{DropTarget, Move, plan_move};

impl<V: Viewport, C: ClipboardSink> TabStrip<V, C> {
    /// Begins dragging `page`. Refused while another drag runs or an overlay is open.
    pub fn drag_start(&mut self, page: PageId) -> Result<(), DragError> {
        if !self.pages.contains(page) {
            return Err(DragError::UnknownPage(page));
        }
        if self.overlay_open() {
            return Err(DragError::Locked(page));
        }
        self.drag.start(page)?;
        self.hovered_insert = None;
        Ok(())
    }

    /// Updates the drop target under the pointer. Never mutates the sequence.
    pub fn drag_over(&mut self, target: Option<DropTarget>) {
        self.drag.hover(target);
    }

    /// Pointer moved to viewport-space `x` during a drag; picks the target by
    /// closest-center collision.
    pub fn drag_move(&mut self, x: f64) {
        if !self.drag.is_dragging() {
            return;
        }
        let content_x = x + self.viewport.scroll_left();
        let target = closest_center(&self.layout(), content_x);
        self.drag.hover(target);
    }

    /// Releases the drag. Performs at most one reorder and returns it.
    pub fn drag_end(&mut self) -> Option<Move> {
        let drop = self.drag.finish()?;
        let mv = match plan_move(&self.pages, drop.source, drop.target) {
            Ok(Some(mv)) => mv,
            Ok(None) => return None,
            Err(err) => {
                log::debug!("drop ignored: {err}");
                return None;
            }
        };
        if self.pages.reorder(mv.from, mv.to) {
            self.pending_events.push(StripEvent::Reordered {
                page: drop.source,
                from: mv.from,
                to: mv.to,
            });
            self.refresh_scroll_state();
        }
        Some(mv)
    }

    /// Aborts the drag without touching the sequence.
    pub fn drag_cancel(&mut self) {
        self.drag.cancel();
    }

    /// Pointer entered (`Some`) or left (`None`) an insert gap.
    pub fn hover_gap(&mut self, gap: Option<usize>) {
        match gap {
            Some(_) if self.drag.is_dragging() => {}
            _ => self.hovered_insert = gap,
        }
    }

    /// What lies under viewport-space `x`.
    pub fn hit(&self, x: f64) -> StripHit {
        hit_test(&self.layout(), x + self.viewport.scroll_left())
    }

    pub fn scroll_left(&mut self) {
        self.viewport.scroll_by(-self.scroll.step);
        self.refresh_scroll_state();
    }

    pub fn scroll_right(&mut self) {
        self.viewport.scroll_by(self.scroll.step);
        self.refresh_scroll_state();
    }
}
