// TUI application state and the mutations the event loop drives
use crate::clipboard::ClipboardSink;
use crate::debounce::{Debouncer, InputEvent};
use ratatui::widgets::ListState;
use std::time::Instant;
use termscout_core::models::{SearchResult, Status};
use termscout_core::theme::Theme;

/// Outcome of one background fetch, tagged with its dispatch sequence
///
/// Fetches are never cancelled; the sequence number is how a completion that
/// arrives after a newer search started gets discarded instead of rendered.
pub struct FetchOutcome {
    pub seq: u64,
    pub query: String,
    pub result: termscout_core::Result<Vec<SearchResult>>,
}

pub struct App {
    pub should_quit: bool,
    pub input: String,
    pub results: Vec<SearchResult>,
    pub list_state: ListState,
    pub selection: Option<String>,
    pub status: Status,
    pub dark: bool,
    pub theme: Theme,
    pub debouncer: Debouncer,
    query_seq: u64,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl App {
    pub fn new(dark: bool, clipboard: Option<Box<dyn ClipboardSink>>) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            results: Vec::new(),
            list_state: ListState::default(),
            selection: None,
            status: Status::Idle,
            dark,
            theme: Theme::for_mode(dark),
            debouncer: Debouncer::new(),
            query_seq: 0,
            clipboard,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Swap the palette; everything on screen repaints from it on the next draw
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        self.theme = Theme::for_mode(self.dark);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        self.input.push(c);
        self.input_changed(now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        self.input.pop();
        self.input_changed(now);
    }

    pub fn clear_input(&mut self, now: Instant) {
        self.input.clear();
        self.input_changed(now);
    }

    fn input_changed(&mut self, now: Instant) {
        if self.debouncer.input(&self.input, now) == InputEvent::Cleared {
            self.clear_results();
            self.status = Status::Idle;
        }
    }

    /// Drop all rows and the selection
    ///
    /// Also advances the sequence number, so an in-flight fetch from before
    /// the clear can no longer land on screen.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.selection = None;
        self.list_state.select(None);
        self.query_seq += 1;
    }

    /// Start a new search: clear the board, report Searching, and hand back
    /// the sequence number the dispatched fetch must carry
    pub fn begin_search(&mut self) -> u64 {
        self.clear_results();
        self.status = Status::Searching;
        self.query_seq
    }

    /// Apply a completed fetch, unless a newer search has started since
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.query_seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.query_seq,
                "discarding stale fetch result"
            );
            return;
        }

        match outcome.result {
            Ok(results) if results.is_empty() => {
                self.status = Status::NoResults;
            }
            Ok(results) => {
                self.status = Status::Found {
                    count: results.len(),
                    query: outcome.query,
                };
                self.results = results;
                self.list_state.select(Some(0));
            }
            Err(e) => {
                self.status = Status::Error(e.to_string());
            }
        }
    }

    /// Move the highlight down (toward later results)
    pub fn select_next(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        if !self.results.is_empty() && current < self.results.len() - 1 {
            self.list_state.select(Some(current + 1));
        }
    }

    /// Move the highlight up (toward earlier results)
    pub fn select_prev(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        if !self.results.is_empty() && current > 0 {
            self.list_state.select(Some(current - 1));
        }
    }

    pub fn highlighted_result(&self) -> Option<&SearchResult> {
        self.results.get(self.list_state.selected()?)
    }

    /// Commit the highlighted row as the selection
    pub fn select_current(&mut self) {
        if let Some(result) = self.highlighted_result() {
            let text = result.display_text();
            self.selection = Some(text.clone());
            self.status = Status::Selected(text);
        }
    }

    /// Copy the selection to the clipboard, reporting the outcome on the
    /// status line and never raising to the caller
    pub fn copy_selected(&mut self) {
        let Some(text) = self.selection.clone() else {
            self.status = Status::SelectFirst;
            return;
        };

        match self.clipboard.as_mut() {
            Some(sink) => match sink.set_text(&text) {
                Ok(()) => self.status = Status::Copied(text),
                Err(e) => self.status = Status::CopyFailed(e.to_string()),
            },
            None => self.status = Status::CopyFailed("clipboard not available".to_string()),
        }
    }
}
