// Library surface for headless/integration tests and reuse.
// The binary in main.rs only parses arguments and owns the terminal.
pub mod analysis;
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod runtime;
pub mod theme;
pub mod ui;
pub mod util;
