use super::interaction::{FieldPrompt, RawFields, UserInteraction};
use crate::core::{Result, TableError};
use crate::render::{TableView, render_catalog, render_table};
use crate::storage::{Catalog, SeedSet, TableId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

pub const DEFAULT_SIZE_UNIT: &str = "ft";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Location,
    Size,
}

impl FromStr for SortKey {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "location" => Ok(Self::Location),
            "size" => Ok(Self::Size),
            other => Err(TableError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::Size => "size",
        };
        f.write_str(key)
    }
}

/// One user-triggered operation on a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { table: TableId },
    Edit { table: TableId, name: String },
    Delete { table: TableId, name: String },
    Sort { table: TableId, key: SortKey },
}

impl Action {
    pub fn table(&self) -> &TableId {
        match self {
            Action::Add { table }
            | Action::Edit { table, .. }
            | Action::Delete { table, .. }
            | Action::Sort { table, .. } => table,
        }
    }
}

/// Application context: the catalog plus what is needed to render it.
///
/// Every action mutates exactly one table and then re-renders that table
/// in full.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    size_unit: String,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            size_unit: DEFAULT_SIZE_UNIT.to_string(),
        }
    }

    /// Builds the catalog from `seed`, reporting refused seed records.
    pub fn seeded(seed: &SeedSet, ui: &mut dyn UserInteraction) -> Result<Self> {
        let catalog = seed.build(ui)?;
        info!(tables = catalog.len(), "session ready");
        Ok(Self::new(catalog))
    }

    pub fn with_size_unit(mut self, unit: impl Into<String>) -> Self {
        self.size_unit = unit.into();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn size_unit(&self) -> &str {
        &self.size_unit
    }

    pub fn render(&self, id: &TableId) -> Result<TableView> {
        let table = self.catalog.get_table(id)?;
        Ok(render_table(id, table, &self.size_unit))
    }

    pub fn render_all(&self) -> Vec<TableView> {
        render_catalog(&self.catalog, &self.size_unit)
    }

    /// Applies `action`, then renders the affected table.
    ///
    /// Bad input and refused adds are reported through `ui` and leave the
    /// table untouched; they do not make this call fail. Only an unknown
    /// table id is an error.
    pub fn dispatch(&mut self, action: Action, ui: &mut dyn UserInteraction) -> Result<TableView> {
        debug!(?action, "dispatch");
        let id = action.table().clone();
        let table = self.catalog.get_table_mut(&id)?;

        match action {
            Action::Add { .. } => {
                let prompt = FieldPrompt::add(table.label(), &self.size_unit);
                match collect(ui, &prompt).parse() {
                    Ok(record) => {
                        if let Err(rejection) = table.add(record) {
                            ui.report_rejection(&rejection.into());
                        }
                    }
                    Err(input) => ui.report_rejection(&input.into()),
                }
            }
            Action::Edit { name, .. } => {
                // Edit controls only exist for rendered rows; a stale one is a no-op.
                if let Some(current) = table.get(&name) {
                    let prompt = FieldPrompt::edit(current, &self.size_unit);
                    match collect(ui, &prompt).parse() {
                        Ok(record) => table.replace(&name, record),
                        Err(input) => ui.report_rejection(&input.into()),
                    }
                }
            }
            Action::Delete { name, .. } => table.remove(&name),
            Action::Sort { key, .. } => match key {
                SortKey::Name => table.sort_by_name(),
                SortKey::Location => table.sort_by_location(),
                SortKey::Size => table.sort_by_size(),
            },
        }

        self.render(&id)
    }
}

/// A cancelled prompt counts as a form left blank.
fn collect(ui: &mut dyn UserInteraction, prompt: &FieldPrompt) -> RawFields {
    ui.collect_fields(prompt).unwrap_or_else(|| {
        debug!(prompt = %prompt.title, "prompt cancelled");
        RawFields::default()
    })
}
