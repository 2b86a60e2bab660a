//! A headless, horizontally scrollable strip of page tabs.
//!
//! [`core`] holds the page sequence and the pure reorder/insert engines,
//! [`strip`] the controller with its drag, rename, delete and layout state.

pub mod config;
pub mod core;
pub mod i18n;
pub mod script;
pub mod strip;

pub use crate::core::{DropTarget, Page, PageIcon, PageId, Sequence};
pub use crate::strip::{StripEvent, TabStrip};
