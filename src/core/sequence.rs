use super::{Page, PageIcon, PageId, SequenceError};

/// Ordered list of pages. Display order is insertion order, ids are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    pages: Vec<Page>,
}

impl Sequence {
    /// Builds a sequence from `pages`, rejecting duplicate ids.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self, SequenceError> {
        let mut seq = Self::default();
        for page in pages {
            seq.append(page)?;
        }
        Ok(seq)
    }

    /// The fixed set of pages a fresh strip starts with.
    pub fn initial() -> Self {
        Self {
            pages: vec![
                Page::new(1, "Info", PageIcon::Info),
                Page::new(2, "Details", PageIcon::FileText),
                Page::new(3, "Other", PageIcon::FileText),
                Page::new(4, "Ending", PageIcon::Check),
                Page::new(5, "Additional", PageIcon::FileText),
                Page::new(6, "Final Page", PageIcon::FileText),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    pub fn ids(&self) -> Vec<PageId> {
        self.pages.iter().map(|p| p.id).collect()
    }

    pub fn first(&self) -> Option<&Page> {
        self.pages.first()
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn append(&mut self, page: Page) -> Result<(), SequenceError> {
        let len = self.pages.len();
        self.insert_at(len, page)
    }

    /// Inserts `page` at `index`, clamped to `0..=len`.
    pub fn insert_at(&mut self, index: usize, page: Page) -> Result<(), SequenceError> {
        if self.contains(page.id) {
            return Err(SequenceError::DuplicateId(page.id));
        }
        let index = index.min(self.pages.len());
        self.pages.insert(index, page);
        Ok(())
    }

    /// Removes the page with `id` and returns it together with its former index.
    pub fn remove_by_id(&mut self, id: PageId) -> Result<(usize, Page), SequenceError> {
        let index = self.index_of(id).ok_or(SequenceError::NotFound(id))?;
        if self.pages.len() == 1 {
            return Err(SequenceError::LastItem);
        }
        Ok((index, self.pages.remove(index)))
    }

    /// Renames a page to the trimmed `name`.
    ///
    /// A blank name is rejected with [`SequenceError::InvalidName`] and the old
    /// name stays; callers treat that as a silent no-op.
    pub fn rename_by_id(&mut self, id: PageId, name: &str) -> Result<(), SequenceError> {
        let index = self.index_of(id).ok_or(SequenceError::NotFound(id))?;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SequenceError::InvalidName);
        }
        self.pages[index].name = trimmed.to_string();
        Ok(())
    }

    /// Moves the page to index 0. Returns `false` when it already was first.
    pub fn move_to_front(&mut self, id: PageId) -> Result<bool, SequenceError> {
        let index = self.index_of(id).ok_or(SequenceError::NotFound(id))?;
        if index == 0 {
            return Ok(false);
        }
        let page = self.pages.remove(index);
        self.pages.insert(0, page);
        Ok(true)
    }

    /// Relocates the page at `from` so it ends up at `to`.
    ///
    /// Both indices refer to positions in the current sequence; out-of-range
    /// indices leave it untouched and return `false`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.pages.len();
        if from >= len || to >= len {
            return false;
        }
        let page = self.pages.remove(from);
        self.pages.insert(to, page);
        from != to
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_sequence.rs"]
mod tests;
