use thiserror::Error;

use crate::core::{DropTarget, PageId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("page {0} is already being dragged")]
    AlreadyDragging(PageId),

    #[error("cannot drag unknown page {0}")]
    UnknownPage(PageId),

    #[error("page {0} is locked by an open menu or dialog")]
    Locked(PageId),
}

/// One drag gesture, from drag start to drop or cancel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        source: PageId,
        /// Drop target currently under the pointer, if any.
        over: Option<DropTarget>,
    },
}

/// A finished gesture that should be handed to the reorder engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropRequest {
    pub source: PageId,
    pub target: DropTarget,
}

impl DragSession {
    pub fn start(&mut self, source: PageId) -> Result<(), DragError> {
        if let DragSession::Dragging { source: active, .. } = self {
            return Err(DragError::AlreadyDragging(*active));
        }
        *self = DragSession::Dragging { source, over: None };
        Ok(())
    }

    /// Updates hover state only; never touches the sequence.
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragSession::Dragging { over, .. } = self {
            *over = target;
        }
    }

    pub fn source(&self) -> Option<PageId> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { source, .. } => Some(*source),
        }
    }

    pub fn over(&self) -> Option<DropTarget> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { over, .. } => *over,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Ends the session. Yields a drop only when a target was under the pointer.
    pub fn finish(&mut self) -> Option<DropRequest> {
        match std::mem::take(self) {
            DragSession::Dragging {
                source,
                over: Some(target),
            } => Some(DropRequest { source, target }),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }
}
