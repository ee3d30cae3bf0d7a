use core::fmt;
use core::iter::FusedIterator;

use alloc::string::String;
use smallvec::SmallVec;

use crate::Record;
use crate::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::raw::{Handle, RawMaintenanceIndex};

/// Maintenance records of one vehicle, ordered by date.
///
/// The index is an [AVL tree]: every node keeps the heights of its two subtrees within one of
/// each other, rotating on the way back up from every insert and delete. Lookups, inserts,
/// updates and deletes are all O(log n) no matter the order dates arrive in.
///
/// Dates are compared as plain strings. Records in `YYYY-MM-DD` form therefore come out in
/// calendar order; anything else is still accepted and sorts lexically.
///
/// # Examples
///
/// ```
/// use maintenance_index::{InsertOutcome, MaintenanceIndex, UpdateOutcome};
///
/// let mut index = MaintenanceIndex::new();
/// assert_eq!(index.insert("2024-03-05", "Tire rotation", 30.0), InsertOutcome::Inserted);
/// assert_eq!(index.insert("2024-01-10", "Oil change", 45.0), InsertOutcome::Inserted);
///
/// // Inserting an existing date never overwrites it; `update` does.
/// assert!(!index.insert("2024-01-10", "Brakes", 300.0).is_inserted());
/// assert_eq!(index.update("2024-01-10", "Oil change", 49.99), UpdateOutcome::Updated);
///
/// let dates: Vec<_> = index.iter().map(|record| record.date()).collect();
/// assert_eq!(dates, ["2024-01-10", "2024-03-05"]);
/// assert_eq!(index.search("2024-01-10").map(|record| record.cost()), Some(49.99));
/// ```
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
#[derive(Clone)]
pub struct MaintenanceIndex {
    raw: RawMaintenanceIndex,
}

impl MaintenanceIndex {
    /// Makes a new, empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawMaintenanceIndex::new(),
        }
    }

    /// Stores a record for `date` unless one already exists.
    ///
    /// An existing record is left exactly as it was and
    /// [`InsertOutcome::Rejected`] is returned; use [`update`](Self::update) to change it.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, date: impl Into<String>, description: impl Into<String>, cost: f64) -> InsertOutcome {
        self.raw.insert(Record::new(date, description, cost))
    }

    /// Returns the record stored for `date`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn search(&self, date: &str) -> Option<&Record> {
        self.raw.get(date)
    }

    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        self.raw.find(date).is_some()
    }

    /// Replaces the description and cost stored for `date`.
    ///
    /// The tree's shape is not affected.
    ///
    /// # Examples
    ///
    /// ```
    /// use maintenance_index::{MaintenanceIndex, UpdateOutcome};
    ///
    /// let mut index = MaintenanceIndex::new();
    /// let _ = index.insert("2024-01-10", "Oil change", 45.0);
    ///
    /// assert_eq!(index.update("2024-01-10", "Oil change", 49.99), UpdateOutcome::Updated);
    /// assert_eq!(index.update("2024-02-01", "Oil change", 49.99), UpdateOutcome::NotFound);
    /// ```
    pub fn update(&mut self, date: &str, description: impl Into<String>, cost: f64) -> UpdateOutcome {
        self.raw.update(date, description.into(), cost)
    }

    /// Removes the record stored for `date`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete(&mut self, date: &str) -> DeleteOutcome {
        self.raw.delete(date)
    }

    /// Visits every record in ascending date order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.raw)
    }

    /// The record with the earliest date.
    #[must_use]
    pub fn first(&self) -> Option<&Record> {
        self.raw.first()
    }

    /// The record with the latest date.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.raw.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty index.
    ///
    /// For `n` records this never exceeds roughly `1.44 * log2(n + 2)`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl Default for MaintenanceIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MaintenanceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MaintenanceIndex {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An in-order iterator over the records of a [`MaintenanceIndex`].
///
/// This `struct` is created by [`MaintenanceIndex::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    tree: &'a RawMaintenanceIndex,
    // Ancestors whose record has not been yielded yet; the top is the next record.
    pending: SmallVec<[Handle; 32]>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a RawMaintenanceIndex) -> Self {
        let mut iter = Self {
            tree,
            pending: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.descend_left(tree.root());
        iter
    }

    fn descend_left(&mut self, mut subtree: Option<Handle>) {
        while let Some(handle) = subtree {
            self.pending.push(handle);
            subtree = self.tree.node(handle).left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<&'a Record> {
        let handle = self.pending.pop()?;
        let node = self.tree.node(handle);
        self.descend_left(node.right);
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            pending: self.pending.clone(),
            remaining: self.remaining,
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}
