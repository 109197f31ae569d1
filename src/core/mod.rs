pub mod collation;
pub mod error;
pub mod record;

pub use collation::locale_cmp;
pub use error::{InputError, Rejection, Result, TableError};
pub use record::{AnimalRecord, format_size};
