//! Per-category budget limits
//!
//! An insertion-ordered map from category to limit. Order matters: it is the
//! order limits are written to the data file, and the most recently inserted
//! category is what an incremental sync appends.

/// Insertion-ordered `category -> limit` map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetLimits {
    entries: Vec<(String, f64)>,
}

impl BudgetLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the limit for a category
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, limit)| *limit)
    }

    /// Set a category's limit
    ///
    /// An existing category keeps its position and gets the new value; a new
    /// category is appended. Returns the previous limit, if any.
    pub fn set(&mut self, category: impl Into<String>, limit: f64) -> Option<f64> {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => Some(std::mem::replace(existing, limit)),
            None => {
                self.entries.push((category, limit));
                None
            }
        }
    }

    /// The most recently inserted entry
    pub fn last(&self) -> Option<(&str, f64)> {
        self.entries
            .last()
            .map(|(name, limit)| (name.as_str(), *limit))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, limit)| (name.as_str(), *limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut limits = BudgetLimits::new();
        limits.set("Rent", 1000.0);
        limits.set("Food", 300.0);
        limits.set("Entertainment", 50.0);

        let names: Vec<_> = limits.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Rent", "Food", "Entertainment"]);
        assert_eq!(limits.last(), Some(("Entertainment", 50.0)));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut limits = BudgetLimits::new();
        limits.set("Rent", 1000.0);
        limits.set("Food", 300.0);

        let previous = limits.set("Rent", 900.0);
        assert_eq!(previous, Some(1000.0));
        assert_eq!(limits.len(), 2);
        assert_eq!(limits.get("Rent"), Some(900.0));
        assert_eq!(limits.last(), Some(("Food", 300.0)));
    }

    #[test]
    fn test_empty() {
        let limits = BudgetLimits::new();
        assert!(limits.is_empty());
        assert_eq!(limits.last(), None);
        assert_eq!(limits.get("Food"), None);
    }
}
