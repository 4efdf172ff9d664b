// Terminal UI implementation using ratatui
// The pretty face of TermScout

pub mod app;
pub mod clipboard;
pub mod debounce;
pub mod runner;
pub mod ui;

pub use app::{App, FetchOutcome};
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use runner::run_tui;
