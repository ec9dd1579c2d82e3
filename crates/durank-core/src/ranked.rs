//! Bounded, size-ordered ranking of the largest entries.

use std::num::NonZeroUsize;

use crate::entry::Entry;

/// Keeps the `N` largest entries offered so far, largest first.
///
/// While filling, each offer is appended and the whole sequence is
/// stable-sorted, so equal sizes keep arrival order. Once full, an offer
/// only gets in if it is strictly larger than some member; it is placed
/// just above the run of smaller members at the bottom and the smallest
/// member falls off.
#[derive(Debug, Clone)]
pub struct RankedTopSet {
    capacity: NonZeroUsize,
    entries: Vec<Entry>,
}

impl RankedTopSet {
    /// Create an empty set that will hold at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.get()),
        }
    }

    /// Offer an entry for ranking.
    ///
    /// Returns `true` if the entry was admitted.
    pub fn offer(&mut self, entry: Entry) -> bool {
        if self.entries.len() < self.capacity.get() {
            tracing::trace!(path = %entry.path().display(), size = entry.size(), "entry admitted");
            self.entries.push(entry);
            self.entries.sort_by(|a, b| b.size().cmp(&a.size()));
            return true;
        }

        let mut index = None;
        for (i, existing) in self.entries.iter().enumerate().rev() {
            if existing.size() < entry.size() {
                index = Some(i);
            } else {
                break;
            }
        }

        match index {
            Some(i) => {
                tracing::trace!(path = %entry.path().display(), size = entry.size(), "entry admitted");
                self.entries.pop();
                self.entries.insert(i, entry);
                true
            }
            None => false,
        }
    }

    /// Current ranking, largest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the ranking, largest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Consume the set and return the ranking.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the set has reached capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity.get()
    }

    /// Size of the lowest-ranked entry, if any.
    pub fn min_size(&self) -> Option<u64> {
        self.entries.last().map(Entry::size)
    }
}

impl<'a> IntoIterator for &'a RankedTopSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
