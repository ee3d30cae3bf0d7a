use core::cmp::Ordering;
use core::mem;

use alloc::string::String;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use crate::Record;
use crate::outcome::{DeleteOutcome, DuplicateKey, InsertOutcome, UpdateOutcome};

/// The AVL tree backing `MaintenanceIndex`.
///
/// Every node lives in `nodes`; the tree shape is carried entirely by the child handles. All
/// structural work is recursive and rebuilds the path it walked on the way back up, so each
/// ancestor gets its height refreshed and, if needed, a rotation before its parent sees it.
#[derive(Clone)]
pub(crate) struct RawMaintenanceIndex {
    /// Arena owning every node of the tree.
    nodes: Arena<Node>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

/// The key of a delete was not on its search path.
struct Absent;

impl RawMaintenanceIndex {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Returns the number of records in the tree.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    /// Height of the whole tree; 0 when empty.
    pub(crate) fn height(&self) -> usize {
        usize::from(self.height_of(self.root))
    }

    /// Standard BST descent by date.
    pub(crate) fn find(&self, date: &str) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match date.cmp(node.date()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get(&self, date: &str) -> Option<&Record> {
        self.find(date).map(|handle| &self.nodes.get(handle).record)
    }

    /// The record with the smallest date.
    pub(crate) fn first(&self) -> Option<&Record> {
        let mut handle = self.root?;
        while let Some(left) = self.nodes.get(handle).left {
            handle = left;
        }
        Some(&self.nodes.get(handle).record)
    }

    /// The record with the largest date.
    pub(crate) fn last(&self) -> Option<&Record> {
        let mut handle = self.root?;
        while let Some(right) = self.nodes.get(handle).right {
            handle = right;
        }
        Some(&self.nodes.get(handle).record)
    }

    /// Overwrites description and cost in place. The shape of the tree is untouched.
    pub(crate) fn update(&mut self, date: &str, description: String, cost: f64) -> UpdateOutcome {
        match self.find(date) {
            Some(handle) => {
                self.nodes.get_mut(handle).record.amend(description, cost);
                UpdateOutcome::Updated
            }
            None => UpdateOutcome::NotFound,
        }
    }

    pub(crate) fn insert(&mut self, record: Record) -> InsertOutcome {
        match self.insert_into(self.root, record) {
            Ok((root, _)) => {
                self.root = Some(root);
                InsertOutcome::Inserted
            }
            Err(_) => InsertOutcome::Rejected(DuplicateKey),
        }
    }

    pub(crate) fn delete(&mut self, date: &str) -> DeleteOutcome {
        match self.delete_from(self.root, date) {
            Ok((root, _)) => {
                self.root = root;
                DeleteOutcome::Deleted
            }
            Err(Absent) => DeleteOutcome::NotFound,
        }
    }

    // Inserts `record` below `subtree`, returning the new subtree root and the new leaf.
    // A duplicate date hands the record back before anything on the path has been touched.
    fn insert_into(&mut self, subtree: Option<Handle>, record: Record) -> Result<(Handle, Handle), Record> {
        let Some(handle) = subtree else {
            let leaf = self.nodes.alloc(Node::leaf(record));
            return Ok((leaf, leaf));
        };

        let node = self.nodes.get(handle);
        let (left, right) = (node.left, node.right);
        let leaf = match record.date().cmp(node.date()) {
            Ordering::Less => {
                let (child, leaf) = self.insert_into(left, record)?;
                self.nodes.get_mut(handle).left = Some(child);
                leaf
            }
            Ordering::Greater => {
                let (child, leaf) = self.insert_into(right, record)?;
                self.nodes.get_mut(handle).right = Some(child);
                leaf
            }
            Ordering::Equal => return Err(record),
        };

        Ok((self.rebalance_after_insert(handle, leaf), leaf))
    }

    // Straight vs. zig-zag is decided by where the new key sits relative to the heavy child.
    fn rebalance_after_insert(&mut self, handle: Handle, leaf: Handle) -> Handle {
        self.update_height(handle);
        let balance = self.balance_factor(handle);

        if balance > 1 {
            let left = self.left_child(handle);
            if self.nodes.get(leaf).date() > self.nodes.get(left).date() {
                let pivot = self.rotate_left(left);
                self.nodes.get_mut(handle).left = Some(pivot);
            }
            return self.rotate_right(handle);
        }

        if balance < -1 {
            let right = self.right_child(handle);
            if self.nodes.get(leaf).date() < self.nodes.get(right).date() {
                let pivot = self.rotate_right(right);
                self.nodes.get_mut(handle).right = Some(pivot);
            }
            return self.rotate_left(handle);
        }

        handle
    }

    // Removes `date` from `subtree`, returning the new subtree root and the removed record.
    fn delete_from(&mut self, subtree: Option<Handle>, date: &str) -> Result<(Option<Handle>, Record), Absent> {
        let handle = subtree.ok_or(Absent)?;

        let node = self.nodes.get(handle);
        let (left, right) = (node.left, node.right);
        let two_children = node.has_two_children();
        let removed = match date.cmp(node.date()) {
            Ordering::Less => {
                let (child, removed) = self.delete_from(left, date)?;
                self.nodes.get_mut(handle).left = child;
                removed
            }
            Ordering::Greater => {
                let (child, removed) = self.delete_from(right, date)?;
                self.nodes.get_mut(handle).right = child;
                removed
            }
            Ordering::Equal if !two_children => {
                // The surviving child, if any, is already a valid AVL subtree.
                let node = self.nodes.take(handle);
                return Ok((node.left.or(node.right), node.record));
            }
            Ordering::Equal => {
                let right = self.right_child(handle);
                let (child, successor) = self.delete_min(right);
                let target = self.nodes.get_mut(handle);
                target.right = child;
                mem::replace(&mut target.record, successor)
            }
        };

        Ok((Some(self.rebalance_after_delete(handle)), removed))
    }

    // Detaches the leftmost node of `handle`'s subtree. That node has no left child, so it is
    // always spliced out rather than replaced.
    fn delete_min(&mut self, handle: Handle) -> (Option<Handle>, Record) {
        match self.nodes.get(handle).left {
            None => {
                let node = self.nodes.take(handle);
                (node.right, node.record)
            }
            Some(left) => {
                let (child, min) = self.delete_min(left);
                self.nodes.get_mut(handle).left = child;
                (Some(self.rebalance_after_delete(handle)), min)
            }
        }
    }

    // There is no new key to steer by, so the heavy child's own balance picks the case.
    fn rebalance_after_delete(&mut self, handle: Handle) -> Handle {
        self.update_height(handle);
        let balance = self.balance_factor(handle);

        if balance > 1 {
            let left = self.left_child(handle);
            if self.balance_factor(left) < 0 {
                let pivot = self.rotate_left(left);
                self.nodes.get_mut(handle).left = Some(pivot);
            }
            return self.rotate_right(handle);
        }

        if balance < -1 {
            let right = self.right_child(handle);
            if self.balance_factor(right) > 0 {
                let pivot = self.rotate_right(right);
                self.nodes.get_mut(handle).right = Some(pivot);
            }
            return self.rotate_left(handle);
        }

        handle
    }

    //       y            x
    //      / \          / \
    //     x   C  ->    A   y
    //    / \              / \
    //   A   B            B   C
    fn rotate_right(&mut self, y: Handle) -> Handle {
        let x = self.left_child(y);
        let b = self.nodes.get(x).right;
        self.nodes.get_mut(y).left = b;
        self.nodes.get_mut(x).right = Some(y);
        self.update_height(y);
        self.update_height(x);
        x
    }

    //     x                y
    //    / \              / \
    //   A   y     ->     x   C
    //      / \          / \
    //     B   C        A   B
    fn rotate_left(&mut self, x: Handle) -> Handle {
        let y = self.right_child(x);
        let b = self.nodes.get(y).left;
        self.nodes.get_mut(x).right = b;
        self.nodes.get_mut(y).left = Some(x);
        self.update_height(x);
        self.update_height(y);
        y
    }

    fn left_child(&self, handle: Handle) -> Handle {
        self.nodes
            .get(handle)
            .left
            .expect("`RawMaintenanceIndex::left_child()` - left-heavy node has no left child!")
    }

    fn right_child(&self, handle: Handle) -> Handle {
        self.nodes
            .get(handle)
            .right
            .expect("`RawMaintenanceIndex::right_child()` - right-heavy node has no right child!")
    }

    #[inline]
    fn height_of(&self, subtree: Option<Handle>) -> u8 {
        subtree.map_or(0, |handle| self.nodes.get(handle).height)
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes.get_mut(handle).height = height;
    }

    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.height_of(node.left)) - i16::from(self.height_of(node.right))
    }
}
