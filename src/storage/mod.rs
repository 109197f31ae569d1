pub mod catalog;
pub mod seed;
pub mod table;

pub use catalog::{Catalog, TableId};
pub use seed::{SeedSet, TableSeed};
pub use table::AnimalTable;
