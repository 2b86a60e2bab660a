//! Drop resolution for drag-to-reorder.
//!
//! A drop lands either on another page or in a gap between pages. Gap `0` sits
//! before the first page and gap `len` after the last one. Resolution is pure:
//! [`plan_move`] only computes indices, [`reorder`] applies them to a copy.

use super::{PageId, ReorderError, Sequence};

/// Where a dragged page was released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    OnItem(PageId),
    OnGap(usize),
}

/// A single relocation, both indices in the pre-move sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    /// True when applying the move leaves the order unchanged.
    pub fn is_noop(self) -> bool {
        self.from == self.to
    }
}

fn resolve_target(seq: &Sequence, target: DropTarget) -> Result<usize, ReorderError> {
    match target {
        DropTarget::OnItem(id) => seq.index_of(id).ok_or(ReorderError::TargetNotFound(target)),
        DropTarget::OnGap(gap) if gap <= seq.len() => Ok(gap),
        DropTarget::OnGap(_) => Err(ReorderError::TargetNotFound(target)),
    }
}

/// Computes where `source` ends up when dropped on `target`.
///
/// Returns `Ok(None)` for drops that must not touch the sequence: the page
/// dropped on itself, or a target that no longer exists. A missing source is
/// an error.
pub fn plan_move(
    seq: &Sequence,
    source: PageId,
    target: DropTarget,
) -> Result<Option<Move>, ReorderError> {
    let from = seq
        .index_of(source)
        .ok_or(ReorderError::SourceNotFound(source))?;
    let target_index = match resolve_target(seq, target) {
        Ok(index) => index,
        Err(err) => {
            log::debug!("drop of page {source} ignored: {err}");
            return Ok(None);
        }
    };
    if from == target_index {
        return Ok(None);
    }

    // Removing the source shifts everything after it one slot to the left.
    let to = if from < target_index {
        target_index - 1
    } else {
        target_index
    };
    Ok(Some(Move { from, to }))
}

/// Returns a new sequence with `source` relocated according to `target`.
pub fn reorder(
    seq: &Sequence,
    source: PageId,
    target: DropTarget,
) -> Result<Sequence, ReorderError> {
    let mut next = seq.clone();
    if let Some(mv) = plan_move(seq, source, target)? {
        next.reorder(mv.from, mv.to);
    }
    Ok(next)
}

#[cfg(test)]
#[path = "../../tests/unit/core_reorder.rs"]
mod tests;
