use super::AnimalTable;
use crate::core::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slug that addresses one table in a catalog, e.g. `big-cats`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `"Big Cats"` -> `big-cats`
    pub fn from_label(label: &str) -> Self {
        let slug = label
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TableId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The set of tables one session works on, in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<(TableId, AnimalTable)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registers an empty table and returns its id.
    pub fn create_table(&mut self, label: &str) -> Result<TableId> {
        let id = TableId::from_label(label);
        if self.table_exists(&id) {
            return Err(TableError::Seed(format!("Table '{}' already exists", id)));
        }
        self.tables.push((id.clone(), AnimalTable::new(label)));
        Ok(id)
    }

    pub fn get_table(&self, id: &TableId) -> Result<&AnimalTable> {
        self.tables
            .iter()
            .find(|(tid, _)| tid == id)
            .map(|(_, table)| table)
            .ok_or_else(|| TableError::UnknownTable(id.to_string()))
    }

    pub fn get_table_mut(&mut self, id: &TableId) -> Result<&mut AnimalTable> {
        self.tables
            .iter_mut()
            .find(|(tid, _)| tid == id)
            .map(|(_, table)| table)
            .ok_or_else(|| TableError::UnknownTable(id.to_string()))
    }

    pub fn table_exists(&self, id: &TableId) -> bool {
        self.tables.iter().any(|(tid, _)| tid == id)
    }

    pub fn table_ids(&self) -> Vec<TableId> {
        self.tables.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn tables(&self) -> impl Iterator<Item = (&TableId, &AnimalTable)> {
        self.tables.iter().map(|(id, table)| (id, table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
