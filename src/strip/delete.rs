use crate::core::PageId;

/// Two-step guard in front of page deletion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Closed,
    PendingConfirm(PageId),
}

/// How a pending confirmation was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteResolution {
    Confirmed(PageId),
    Cancelled(PageId),
}

impl DeleteConfirm {
    /// Opens the confirmation for `page`, replacing any other pending one.
    pub fn request(&mut self, page: PageId) {
        *self = DeleteConfirm::PendingConfirm(page);
    }

    pub fn pending(&self) -> Option<PageId> {
        match self {
            DeleteConfirm::Closed => None,
            DeleteConfirm::PendingConfirm(page) => Some(*page),
        }
    }

    pub fn confirm(&mut self) -> Option<DeleteResolution> {
        let page = self.pending()?;
        *self = DeleteConfirm::Closed;
        Some(DeleteResolution::Confirmed(page))
    }

    /// Cancel button, Escape, or focus loss.
    pub fn cancel(&mut self) -> Option<DeleteResolution> {
        let page = self.pending()?;
        *self = DeleteConfirm::Closed;
        Some(DeleteResolution::Cancelled(page))
    }
}
