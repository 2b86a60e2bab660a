mod error;
mod insert;
mod page;
mod reorder;
mod sequence;

pub use error::{ReorderError, SequenceError};
pub use insert::{
    IdAllocator, PageFactory, append_new_page, duplicate_page, insert_new_page, set_as_first,
};
pub use page::{Page, PageIcon, PageId};
pub use reorder::{DropTarget, Move, plan_move, reorder};
pub use sequence::Sequence;
