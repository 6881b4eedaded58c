use crate::utils::error::{MergeError, Result};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// A set of unique tags. Tags are only ordered when read back through
/// [`TagSet::sorted`] or the `Display` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: HashSet<String>,
}

impl TagSet {
    /// Builds a set from a space-separated list. Empty tokens are dropped,
    /// so `""` gives an empty set.
    pub fn new(tags: &str) -> Self {
        let mut set = Self::default();
        set.insert(tags);
        set
    }

    /// Inserts one or more space-separated tags.
    pub fn insert(&mut self, tags: &str) {
        self.tags.extend(
            tags.split(' ')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string),
        );
    }

    pub fn union(&mut self, other: &TagSet) {
        self.tags.extend(other.tags.iter().cloned());
    }

    /// Tags in string order, not numeric: `"10"` sorts before `"2"`.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sorted().join(" "))
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

/// One dictionary record.
///
/// The derived `PartialEq` compares every field, tags included. Dictionary
/// identity is [`Entry::is_same_as`], which ignores tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    source: String,
    target: String,
    tags: TagSet,
}

impl Entry {
    pub fn new(source: &str, target: &str, tags: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            tags: TagSet::new(tags),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Both source and target match.
    pub fn is_same_as(&self, other: &Entry) -> bool {
        self.source == other.source && self.target == other.target
    }

    /// Exactly one of source or target matches. When both match the entries
    /// are the same term, not a redefinition.
    pub fn redefines(&self, other: &Entry) -> bool {
        (self.source == other.source || self.target == other.target) && !self.is_same_as(other)
    }

    /// Unions `other`'s tags into this entry. Only valid for the same term.
    pub fn merge_tags_from(&mut self, other: &Entry) -> Result<()> {
        if !self.is_same_as(other) {
            return Err(MergeError::IncompatibleMerge {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        self.tags.union(&other.tags);
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.source, self.target, self.tags)
    }
}
