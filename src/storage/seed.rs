use super::Catalog;
use crate::core::{AnimalRecord, Result, TableError};
use crate::facade::UserInteraction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Records loaded into one table at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSeed {
    pub label: String,
    #[serde(default)]
    pub animals: Vec<AnimalRecord>,
}

fn table(label: &str, animals: &[(&str, &str, &str, f64)]) -> TableSeed {
    TableSeed {
        label: label.to_string(),
        animals: animals
            .iter()
            .map(|&(name, image, location, size)| AnimalRecord::new(name, image, location, size))
            .collect(),
    }
}

/// Startup contents for a whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSet {
    pub tables: Vec<TableSeed>,
}

impl SeedSet {
    /// Big Cats, Dogs and Big Fish with their sample animals.
    pub fn builtin() -> Self {
        Self {
            tables: vec![
                table(
                    "Big Cats",
                    &[
                        ("Tiger", "assets/tiger.jpg", "Asia", 10.0),
                        ("Lion", "assets/lion.jpg", "Africa", 8.0),
                        ("Leopard", "assets/leopard.jpg", "Africa and Asia", 5.0),
                        ("Cheetah", "assets/cheetah.jpg", "Africa", 5.0),
                        ("Caracal", "assets/caracal.jpg", "Africa", 3.0),
                        ("Jaguar", "assets/jaguar.jpg", "Amazon", 5.0),
                    ],
                ),
                table(
                    "Dogs",
                    &[
                        ("Rottweiler", "assets/rottweiler.jpg", "Germany", 2.0),
                        ("German Shepard", "assets/germanshepherd.jpg", "Germany", 2.0),
                        ("Labrador", "assets/labrador.jpg", "UK", 2.0),
                        ("Alabai", "assets/alabai.jpg", "Turkey", 2.0),
                    ],
                ),
                table(
                    "Big Fish",
                    &[
                        ("Humpback Whale", "assets/humpbackwhale.jpg", "Atlantic Ocean", 15.0),
                        ("Killer Whale", "assets/killerwhale.jpg", "Atlantic Ocean", 12.0),
                        ("Tiger Shark", "assets/tigershark.jpg", "Ocean", 8.0),
                        ("Hammerhead Shark", "assets/hammerheadshark.jpg", "Ocean", 8.0),
                    ],
                ),
            ],
        }
    }

    /// Reads a JSON seed file shaped like `{"tables": [{"label", "animals"}]}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| TableError::Seed(format!("{}: {}", path.display(), e)))?;
        let seed: SeedSet = serde_json::from_str(&raw)?;
        if seed.tables.is_empty() {
            return Err(TableError::Seed(format!("{}: no tables", path.display())));
        }
        Ok(seed)
    }

    /// Builds a catalog by feeding every seed record through `add`.
    ///
    /// Refused records are reported exactly like a live add and skipped.
    pub fn build(&self, ui: &mut dyn UserInteraction) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for seed in &self.tables {
            let id = catalog.create_table(&seed.label)?;
            let table = catalog.get_table_mut(&id)?;
            for animal in &seed.animals {
                if let Err(rejection) = table.add(animal.clone()) {
                    warn!(table = %id, error = %rejection, "seed record rejected");
                    ui.report_rejection(&rejection.into());
                }
            }
            info!(table = %id, animals = table.len(), "table seeded");
        }
        Ok(catalog)
    }
}
