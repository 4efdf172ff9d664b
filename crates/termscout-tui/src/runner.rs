// TUI event loop and terminal management
use crate::app::{App, FetchOutcome};
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use termscout_core::search::SearchProvider;
use tokio::sync::mpsc::{self, UnboundedSender};

/// How long one event poll blocks; keeps channel draining and the debouncer
/// responsive while idle
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Run the TUI application until the user quits
pub async fn run_tui(mut app: App, provider: Arc<dyn SearchProvider>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, provider).await;

    // Restore terminal on both the success and error paths
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    provider: Arc<dyn SearchProvider>,
) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<FetchOutcome>();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Hand completed fetches from the workers back to the UI state
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.apply_outcome(outcome);
        }

        // Commit a search once typing has gone quiet
        if let Some(query) = app.debouncer.poll(Instant::now()) {
            let seq = app.begin_search();
            spawn_fetch(provider.clone(), outcome_tx.clone(), seq, query);
        }

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// One fetch, one task. Never cancelled; a superseded completion is dropped
/// by sequence number when it comes back.
fn spawn_fetch(
    provider: Arc<dyn SearchProvider>,
    outcome_tx: UnboundedSender<FetchOutcome>,
    seq: u64,
    query: String,
) {
    tokio::spawn(async move {
        tracing::debug!(seq, %query, "dispatching terminology lookup");
        let result = provider.search(&query).await;
        if let Err(ref e) = result {
            tracing::warn!(seq, "lookup failed: {e}");
        }
        // Receiver gone means the UI already shut down.
        let _ = outcome_tx.send(FetchOutcome { seq, query, result });
    });
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let now = Instant::now();
    match (code, modifiers) {
        (KeyCode::Esc, _) => app.quit(),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => app.copy_selected(),
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => app.toggle_theme(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => app.clear_input(now),
        (KeyCode::Up, _) => app.select_prev(),
        (KeyCode::Down, _) => app.select_next(),
        (KeyCode::Enter, _) => app.select_current(),
        (KeyCode::Backspace, _) => app.pop_char(now),
        (KeyCode::Char(c), m)
            if !m.intersects(
                KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
            ) =>
        {
            app.push_char(c, now)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use termscout_core::models::SearchResult;
    use termscout_core::Error;

    mockall::mock! {
        Provider {}

        #[async_trait]
        impl SearchProvider for Provider {
            async fn search(&self, query: &str) -> termscout_core::Result<Vec<SearchResult>>;
        }
    }

    #[tokio::test]
    async fn fetch_task_reports_back_tagged_with_its_sequence() {
        let mut provider = MockProvider::new();
        provider
            .expect_search()
            .withf(|query| query == "fever")
            .times(1)
            .returning(|_| {
                Ok(vec![SearchResult {
                    code: "R50.9".to_string(),
                    description: "Fever, unspecified".to_string(),
                }])
            });

        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_fetch(Arc::new(provider), tx, 7, "fever".to_string());

        let outcome = rx.recv().await.expect("fetch task reports back");
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.query, "fever");
        assert_eq!(outcome.result.unwrap()[0].code, "R50.9");
    }

    #[tokio::test]
    async fn failed_fetch_still_reports_back() {
        let mut provider = MockProvider::new();
        provider
            .expect_search()
            .returning(|_| Err(Error::ApiError("boom".to_string())));

        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_fetch(Arc::new(provider), tx, 1, "flu".to_string());

        let outcome = rx.recv().await.expect("fetch task reports back");
        assert!(outcome.result.is_err());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::new(true, None);
        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);

        let mut app = App::new(true, None);
        handle_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn plain_chars_edit_the_input_but_control_chords_do_not() {
        let mut app = App::new(true, None);
        handle_key(&mut app, KeyCode::Char('f'), KeyModifiers::NONE);
        handle_key(&mut app, KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(app.input, "fL");

        handle_key(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(app.input, "fL");
        assert_eq!(app.theme.name, "Light");

        handle_key(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input, "f");

        handle_key(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(app.input.is_empty());
    }
}
