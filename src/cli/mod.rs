pub mod app;
pub mod prompt;
pub mod ui;
