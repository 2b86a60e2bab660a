use super::{Page, PageIcon, PageId, Sequence, SequenceError};

/// Monotonic id source for new pages.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Seeds the allocator past every id already present in `seq`.
    ///
    /// When `u64::MAX` is taken there is no "past"; the allocator then starts
    /// at the smallest id not in use.
    pub fn after(seq: &Sequence) -> Self {
        let max = seq.iter().map(|p| p.id.0).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(next) => Self::starting_at(next),
            None => Self::starting_at(smallest_unused(seq)),
        }
    }

    /// Hands out the next id. Wraps at `u64::MAX`; callers retry on collision.
    pub fn allocate(&mut self) -> PageId {
        let id = PageId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

fn smallest_unused(seq: &Sequence) -> u64 {
    let mut used: Vec<u64> = seq.iter().map(|p| p.id.0).collect();
    used.sort_unstable();
    let mut candidate = 1;
    for id in used {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate += 1;
        }
    }
    candidate
}

/// Creates pages with fresh ids and default names.
#[derive(Clone, Debug)]
pub struct PageFactory {
    ids: IdAllocator,
    name_prefix: String,
    copy_suffix: String,
}

impl PageFactory {
    pub fn new(ids: IdAllocator, name_prefix: &str, copy_suffix: &str) -> Self {
        Self {
            ids,
            name_prefix: name_prefix.to_string(),
            copy_suffix: copy_suffix.to_string(),
        }
    }

    /// Factory with `"Page N"` names and `" Copy"` suffix, seeded after `seq`.
    pub fn for_sequence(seq: &Sequence) -> Self {
        Self::new(IdAllocator::after(seq), "Page", " Copy")
    }

    /// A blank page for a sequence currently holding `len` pages.
    pub fn blank(&mut self, len: usize) -> Page {
        Page {
            id: self.ids.allocate(),
            name: format!("{} {}", self.name_prefix, len + 1),
            icon: PageIcon::FileText,
        }
    }

    pub fn copy_of(&mut self, source: &Page) -> Page {
        Page {
            id: self.ids.allocate(),
            name: format!("{}{}", source.name, self.copy_suffix),
            icon: source.icon,
        }
    }
}

/// Inserts a blank page at `index` (clamped to `0..=len`) and returns its id.
pub fn insert_new_page(seq: &mut Sequence, index: usize, factory: &mut PageFactory) -> PageId {
    let index = index.min(seq.len());
    loop {
        let page = factory.blank(seq.len());
        let id = page.id;
        match seq.insert_at(index, page) {
            Ok(()) => return id,
            // Only reachable when pages were added behind the factory's back.
            Err(_) => log::warn!("page id {id} already taken, allocating another"),
        }
    }
}

pub fn append_new_page(seq: &mut Sequence, factory: &mut PageFactory) -> PageId {
    let len = seq.len();
    insert_new_page(seq, len, factory)
}

/// Inserts `"<name> Copy"` right after `source` and returns the copy's id.
pub fn duplicate_page(
    seq: &mut Sequence,
    source: PageId,
    factory: &mut PageFactory,
) -> Result<PageId, SequenceError> {
    let index = seq.index_of(source).ok_or(SequenceError::NotFound(source))?;
    let original = seq.pages()[index].clone();
    loop {
        let copy = factory.copy_of(&original);
        let id = copy.id;
        match seq.insert_at(index + 1, copy) {
            Ok(()) => return Ok(id),
            Err(_) => log::warn!("page id {id} already taken, allocating another"),
        }
    }
}

/// Moves `id` to the front. Returns `false` if it already was the first page.
pub fn set_as_first(seq: &mut Sequence, id: PageId) -> Result<bool, SequenceError> {
    seq.move_to_front(id)
}

#[cfg(test)]
#[path = "../../tests/unit/core_insert.rs"]
mod tests;
