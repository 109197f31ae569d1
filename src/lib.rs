// ============================================================================
// Animal Tables Library
// ============================================================================

pub mod config;
pub mod core;
pub mod facade;
pub mod render;
pub mod storage;
pub mod web;

// Re-export main types for convenience
pub use config::AppConfig;
pub use crate::core::{AnimalRecord, InputError, Rejection, Result, TableError};
pub use facade::{Action, RawFields, RecordingInteraction, Session, SortKey, UserInteraction};
pub use render::{RenderRow, TableView};
pub use storage::{AnimalTable, Catalog, SeedSet, TableId};

/// Loads the seed named by `config` (or the built-in one) and opens a
/// session on it.
///
/// # Examples
///
/// ```
/// use animal_tables::{AppConfig, RecordingInteraction, open_session};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut ui = RecordingInteraction::default();
/// let session = open_session(&AppConfig::default(), &mut ui)?;
/// assert_eq!(session.catalog().len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn open_session(config: &AppConfig, ui: &mut dyn UserInteraction) -> Result<Session> {
    let seed = match &config.seed_file {
        Some(path) => SeedSet::from_file(path)?,
        None => SeedSet::builtin(),
    };
    Ok(Session::seeded(&seed, ui)?.with_size_unit(config.size_unit.clone()))
}
