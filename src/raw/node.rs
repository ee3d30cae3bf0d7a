use crate::Record;

use super::handle::Handle;

/// One record of the tree plus its two child links.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // Height of the subtree rooted here; a leaf is 1 and an empty subtree is 0.
    pub(crate) height: u8,
}

impl Node {
    pub(crate) const fn leaf(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    #[inline]
    pub(crate) fn date(&self) -> &str {
        self.record.date()
    }

    #[inline]
    pub(crate) const fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}
