// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds CLI parsing and terminal setup.
pub mod app;
pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod info;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod terminal;
pub mod timer;
pub mod ui;

pub use error::{PickPackError, Result};
