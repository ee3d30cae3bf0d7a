use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::{MaintenanceIndex, Record};

/// One [`MaintenanceIndex`] per vehicle model.
///
/// A model's index is created by its first insert. Every other operation leaves unknown models
/// alone and answers `None`, so callers can tell "no such model" from "no such date".
///
/// # Examples
///
/// ```
/// use maintenance_index::{ModelRegistry, UpdateOutcome};
///
/// let mut registry = ModelRegistry::new();
/// let _ = registry.insert("Civic", "2024-01-10", "Oil change", 45.0);
///
/// assert_eq!(registry.update("Civic", "2024-01-10", "Oil change", 49.99), Some(UpdateOutcome::Updated));
/// assert_eq!(registry.update("Accord", "2024-01-10", "Oil change", 49.99), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, MaintenanceIndex>,
}

impl ModelRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self { models: BTreeMap::new() }
    }

    /// Inserts into `model`'s index, creating the index if this is the model's first record.
    pub fn insert(
        &mut self,
        model: &str,
        date: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
    ) -> InsertOutcome {
        self.models.entry(String::from(model)).or_default().insert(date, description, cost)
    }

    #[must_use]
    pub fn index(&self, model: &str) -> Option<&MaintenanceIndex> {
        self.models.get(model)
    }

    #[must_use]
    pub fn index_mut(&mut self, model: &str) -> Option<&mut MaintenanceIndex> {
        self.models.get_mut(model)
    }

    /// The record for `date` in `model`'s index. Use [`index`](Self::index) to tell an unknown
    /// model from a missing date.
    #[must_use]
    pub fn search(&self, model: &str, date: &str) -> Option<&Record> {
        self.index(model)?.search(date)
    }

    pub fn update(
        &mut self,
        model: &str,
        date: &str,
        description: impl Into<String>,
        cost: f64,
    ) -> Option<UpdateOutcome> {
        self.index_mut(model).map(|index| index.update(date, description, cost))
    }

    /// Deleting a model's last record keeps its (now empty) index registered.
    pub fn delete(&mut self, model: &str, date: &str) -> Option<DeleteOutcome> {
        self.index_mut(model).map(|index| index.delete(date))
    }

    /// Registered model names in ascending order.
    pub fn models(&self) -> impl Iterator<Item = &str> + '_ {
        self.models.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn first_insert_creates_the_index() {
        let mut registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.index("Civic").is_none());

        assert!(registry.insert("Civic", "2024-01-10", "Oil change", 45.0).is_inserted());
        assert!(registry.insert("Civic", "2024-02-10", "Wipers", 20.0).is_inserted());
        assert!(registry.insert("Accord", "2024-01-10", "Oil change", 55.0).is_inserted());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index("Civic").map(MaintenanceIndex::len), Some(2));
        assert_eq!(registry.models().collect::<Vec<_>>(), ["Accord", "Civic"]);
    }

    #[test]
    fn models_are_independent() {
        let mut registry = ModelRegistry::new();
        let _ = registry.insert("Civic", "2024-01-10", "Oil change", 45.0);
        let _ = registry.insert("Accord", "2024-01-10", "Brakes", 300.0);

        assert_eq!(registry.delete("Civic", "2024-01-10"), Some(DeleteOutcome::Deleted));
        let accord = registry.search("Accord", "2024-01-10").expect("accord record kept");
        assert_eq!(accord.description(), "Brakes");
    }

    #[test]
    fn unknown_model_is_distinct_from_unknown_date() {
        let mut registry = ModelRegistry::new();
        let _ = registry.insert("Civic", "2024-01-10", "Oil change", 45.0);

        assert!(registry.search("Civic", "2024-05-05").is_none());
        assert!(registry.search("Golf", "2024-01-10").is_none());
        assert_eq!(registry.update("Civic", "2024-05-05", "x", 1.0), Some(UpdateOutcome::NotFound));
        assert_eq!(registry.update("Golf", "2024-01-10", "x", 1.0), None);
        assert_eq!(registry.delete("Civic", "2024-05-05"), Some(DeleteOutcome::NotFound));
        assert_eq!(registry.delete("Golf", "2024-01-10"), None);
        assert!(registry.index("Golf").is_none());
    }

    #[test]
    fn emptied_model_stays_registered() {
        let mut registry = ModelRegistry::new();
        let _ = registry.insert("Civic", "2024-01-10", "Oil change", 45.0);
        assert_eq!(registry.delete("Civic", "2024-01-10"), Some(DeleteOutcome::Deleted));

        let civic = registry.index("Civic").expect("model should remain registered");
        assert!(civic.is_empty());
    }

    #[test]
    fn duplicate_insert_through_registry_is_rejected() {
        let mut registry = ModelRegistry::new();
        let _ = registry.insert("Civic", "2024-01-10", "Oil change", 45.0);
        assert!(!registry.insert("Civic", "2024-01-10", "Brakes", 300.0).is_inserted());
        let kept = registry.search("Civic", "2024-01-10").expect("record kept");
        assert_eq!(kept.description(), "Oil change");
    }
}
