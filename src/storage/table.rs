use crate::core::{AnimalRecord, Rejection, locale_cmp};
use serde::Serialize;
use tracing::{debug, warn};

/// Ordered, uniquely named records for one category.
#[derive(Debug, Clone, Serialize)]
pub struct AnimalTable {
    label: String,
    records: Vec<AnimalRecord>,
}

impl AnimalTable {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends `record`.
    ///
    /// The duplicate check runs before validation, so an invalid record that
    /// reuses a name is reported as [`Rejection::DuplicateName`].
    pub fn add(&mut self, record: AnimalRecord) -> Result<(), Rejection> {
        if self.contains(&record.name) {
            warn!(table = %self.label, name = %record.name, "duplicate animal name");
            return Err(Rejection::DuplicateName(record.name));
        }
        if !record.validate() {
            warn!(table = %self.label, name = %record.name, "invalid animal data");
            return Err(Rejection::InvalidRecord(record.name));
        }

        debug!(table = %self.label, name = %record.name, "animal added");
        self.records.push(record);
        Ok(())
    }

    /// Drops every record named `name`. Absent names are ignored.
    pub fn remove(&mut self, name: &str) {
        let before = self.records.len();
        self.records.retain(|r| r.name != name);
        debug!(
            table = %self.label,
            name,
            removed = before - self.records.len(),
            "animal removed"
        );
    }

    /// Swaps the first record named `name` for `record`, keeping its slot.
    ///
    /// The replacement is not checked for validity or for a name clash with
    /// other rows; callers own that.
    pub fn replace(&mut self, name: &str, record: AnimalRecord) {
        match self.records.iter().position(|r| r.name == name) {
            Some(idx) => {
                debug!(table = %self.label, old = name, new = %record.name, "animal replaced");
                self.records[idx] = record;
            }
            None => debug!(table = %self.label, name, "replace target not found"),
        }
    }

    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    }

    pub fn sort_by_location(&mut self) {
        self.records.sort_by(|a, b| locale_cmp(&a.location, &b.location));
    }

    pub fn sort_by_size(&mut self) {
        self.records.sort_by(|a, b| a.compare_size(b));
    }

    pub fn list(&self) -> &[AnimalRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&AnimalRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big_cats() -> AnimalTable {
        let mut table = AnimalTable::new("Big Cats");
        table.add(AnimalRecord::new("Tiger", "t.jpg", "Asia", 10.0)).unwrap();
        table.add(AnimalRecord::new("Lion", "l.jpg", "Africa", 8.0)).unwrap();
        table.add(AnimalRecord::new("Leopard", "p.jpg", "Africa and Asia", 5.0)).unwrap();
        table
    }

    fn names(table: &AnimalTable) -> Vec<&str> {
        table.list().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let table = big_cats();
        assert_eq!(names(&table), vec!["Tiger", "Lion", "Leopard"]);
        assert_eq!(table.label(), "Big Cats");
    }

    #[test]
    fn test_duplicate_precedes_validation() {
        let mut table = big_cats();
        let err = table
            .add(AnimalRecord::new("Tiger", "", "", -1.0))
            .unwrap_err();
        assert_eq!(err, Rejection::DuplicateName("Tiger".into()));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let mut table = big_cats();
        table.add(AnimalRecord::new("tiger", "t.jpg", "Asia", 1.0)).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_sort_by_location_is_stable() {
        let mut table = big_cats();
        table.add(AnimalRecord::new("Cheetah", "c.jpg", "Africa", 5.0)).unwrap();
        table.sort_by_location();
        assert_eq!(names(&table), vec!["Lion", "Cheetah", "Leopard", "Tiger"]);
    }

    #[test]
    fn test_replace_absent_is_noop() {
        let mut table = big_cats();
        table.replace("Puma", AnimalRecord::new("Puma", "x", "Andes", 4.0));
        assert_eq!(names(&table), vec!["Tiger", "Lion", "Leopard"]);
    }
}
