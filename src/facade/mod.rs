pub mod interaction;
pub mod session;

pub use interaction::{FieldPrompt, RawFields, RecordingInteraction, UserInteraction};
pub use session::{Action, DEFAULT_SIZE_UNIT, Session, SortKey};
