//! Results of the mutating operations on a [`MaintenanceIndex`](crate::MaintenanceIndex).
//!
//! Duplicates and missing dates are ordinary answers, not failures, so none of these are
//! `Err` values. Callers decide how to report them.

/// Marker carried by [`InsertOutcome::Rejected`]: the date is already taken.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DuplicateKey;

/// Result of [`MaintenanceIndex::insert`](crate::MaintenanceIndex::insert).
#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InsertOutcome {
    /// A new record was stored.
    Inserted,
    /// A record with the same date already exists; it was left untouched.
    Rejected(DuplicateKey),
}

impl InsertOutcome {
    #[must_use]
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Result of [`MaintenanceIndex::update`](crate::MaintenanceIndex::update).
#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

impl UpdateOutcome {
    #[must_use]
    pub const fn is_updated(self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// Result of [`MaintenanceIndex::delete`](crate::MaintenanceIndex::delete).
#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}
