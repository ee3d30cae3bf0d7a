use alloc::string::String;

/// A single maintenance entry.
///
/// The date is the record's key inside a [`MaintenanceIndex`](crate::MaintenanceIndex). It is
/// compared as a plain string, so `YYYY-MM-DD` dates sort chronologically while any other
/// shape simply sorts lexically.
///
/// # Examples
///
/// ```
/// use maintenance_index::Record;
///
/// let record = Record::new("2024-01-10", "Oil change", 49.99);
/// assert_eq!(record.date(), "2024-01-10");
/// assert_eq!(record.description(), "Oil change");
/// assert_eq!(record.cost(), 49.99);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    date: String,
    description: String,
    cost: f64,
}

impl Record {
    /// Creates a record. `cost` is stored as given.
    #[must_use]
    pub fn new(date: impl Into<String>, description: impl Into<String>, cost: f64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            cost,
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Replaces everything except the date.
    pub(crate) fn amend(&mut self, description: String, cost: f64) {
        self.description = description;
        self.cost = cost;
    }
}
