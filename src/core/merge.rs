use crate::domain::model::Entry;
use crate::utils::error::Result;

/// Index of the first entry in `haystack` that is the same term as `needle`.
pub fn position_of_equal(needle: &Entry, haystack: &[Entry]) -> Option<usize> {
    haystack.iter().position(|entry| entry.is_same_as(needle))
}

pub fn find_equal<'a>(needle: &Entry, haystack: &'a [Entry]) -> Option<&'a Entry> {
    position_of_equal(needle, haystack).map(|index| &haystack[index])
}

/// Every entry in `haystack` that `needle` redefines, in haystack order.
/// An empty result means no redefinition was found.
pub fn find_redefinitions<'a>(needle: &Entry, haystack: &'a [Entry]) -> Vec<&'a Entry> {
    haystack
        .iter()
        .filter(|entry| needle.redefines(entry))
        .collect()
}

/// Accumulated, deduplicated entries in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<Entry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `incoming` into the corpus. An entry already present has its
    /// tags unioned in place and keeps its position; anything else is
    /// appended.
    pub fn merge(&mut self, incoming: Vec<Entry>) -> Result<()> {
        for entry in incoming {
            match position_of_equal(&entry, &self.entries) {
                Some(index) => self.entries[index].merge_tags_from(&entry)?,
                None => self.entries.push(entry),
            }
        }
        Ok(())
    }

    pub fn redefinitions_of(&self, needle: &Entry) -> Vec<&Entry> {
        find_redefinitions(needle, &self.entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Corpus {
    /// Starts from an existing list without deduplicating it.
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
