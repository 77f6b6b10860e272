//! Dashboard event loop
//!
//! `DashboardApp` owns the controller and the UI-only state (spinner frame,
//! quit flag). `TuiRenderer` owns the terminal and multiplexes three sources
//! with `tokio::select!`: keyboard events, the redraw tick and analysis
//! completions. Every pass rebuilds the dashboard view model from a
//! controller snapshot and draws it.

use std::io;
use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
};
use sentiview_runtime::{AnalyzeOutcome, Completion, CompletionReceiver, Controller};
use sentiview_types::CompanyEntry;
use tokio::time::MissedTickBehavior;

use crate::presentation::presenters::present_dashboard;
use crate::presentation::view_models::{ChartsViewModel, DashboardViewModel};
use crate::presentation::views::tui::DashboardView;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectPrevious,
    SelectNext,
    Analyze,
}

/// Key bindings. Only key presses count; repeats and releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Char('a') => Some(Action::Analyze),
        _ => None,
    }
}

pub struct DashboardApp {
    controller: Controller,
    companies: Vec<CompanyEntry>,
    charts: ChartsViewModel,
    tick: usize,
    should_quit: bool,
}

impl DashboardApp {
    pub fn new(controller: Controller, charts: ChartsViewModel) -> Self {
        let companies = controller.companies();
        Self {
            controller,
            companies,
            charts,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectPrevious => self.step_selection(false),
            Action::SelectNext => self.step_selection(true),
            Action::Analyze => match self.controller.analyze() {
                AnalyzeOutcome::Started { ticket } => {
                    tracing::debug!(ticket, "analyze pressed");
                }
                outcome => tracing::debug!(?outcome, "analyze ignored"),
            },
        }
    }

    /// Move through the selector. Slot 0 is the placeholder, then the
    /// companies in store order; both ends wrap.
    fn step_selection(&mut self, forward: bool) {
        let slots = self.companies.len() + 1;
        let current = self
            .controller
            .selected()
            .and_then(|name| self.companies.iter().position(|c| c.name == name))
            .map_or(0, |i| i + 1);

        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        let company = next
            .checked_sub(1)
            .and_then(|i| self.companies.get(i))
            .map(|c| c.name.clone());
        self.controller.select(company.as_deref());
    }

    pub fn apply(&mut self, completion: Completion) {
        self.controller.apply(completion);
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    pub fn view_model(&self) -> DashboardViewModel {
        present_dashboard(&self.controller.snapshot(), &self.companies, &self.charts)
    }

    pub fn render(&self, frame: &mut Frame) {
        let vm = self.view_model();
        frame.render_widget(DashboardView::new(&vm, self.spinner()), frame.area());
    }
}

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub async fn run(self, app: DashboardApp, rx: CompletionReceiver) -> Result<()> {
        let session = TerminalSession::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let result = event_loop(&mut terminal, app, rx, self.tick_rate).await;

        drop(session);
        terminal.show_cursor()?;

        result
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Chains a terminal-restoring panic hook in front of the current one and
/// puts the current one back on drop.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install() -> Self {
        let previous: Arc<PanicHook> = Arc::new(std::panic::take_hook());
        let chained = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            chained(panic_info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook cannot be swapped while unwinding
        if std::thread::panicking() {
            return;
        }
        let previous = Arc::clone(&self.previous);
        drop(std::panic::take_hook());
        std::panic::set_hook(Box::new(move |panic_info| previous(panic_info)));
    }
}

/// Raw mode and the alternate screen for the lifetime of the dashboard.
///
/// Dropping it leaves both, including when setup fails halfway.
struct TerminalSession {
    _hook: PanicHookGuard,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        let session = Self {
            _hook: PanicHookGuard::install(),
        };
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: DashboardApp,
    mut rx: CompletionReceiver,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = map_key(key) {
                        app.handle_action(action);
                    }
                }
                // Resize and mouse events just trigger a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(completion) = rx.recv() => app.apply(completion),
            _ = ticker.tick() => app.on_tick(),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_charts;
    use crate::presentation::views::tui::buffer_text;
    use ratatui::backend::TestBackend;
    use sentiview_runtime::Phase;
    use sentiview_store::StaticStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LATENCY: Duration = Duration::from_millis(2000);

    fn app() -> (DashboardApp, CompletionReceiver) {
        let store = Arc::new(StaticStore::builtin());
        let charts = present_charts(&*store);
        let (controller, rx) = Controller::new(store, LATENCY);
        (DashboardApp::new(controller, charts), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(app: &DashboardApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Down)), Some(Action::SelectNext));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(Action::SelectPrevious));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::Analyze));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_wraps_through_placeholder() {
        let (mut app, _rx) = app();

        app.handle_action(Action::SelectNext);
        assert_eq!(app.controller().selected(), Some("Apple Inc"));

        app.handle_action(Action::SelectPrevious);
        assert_eq!(app.controller().selected(), None);

        app.handle_action(Action::SelectPrevious);
        assert_eq!(app.controller().selected(), Some("Google"));

        app.handle_action(Action::SelectNext);
        assert_eq!(app.controller().selected(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_without_selection_does_nothing() {
        let (mut app, _rx) = app();
        app.handle_action(Action::Analyze);
        assert_eq!(app.controller().phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_analysis_cycle_renders_result() {
        let (mut app, mut rx) = app();

        let idle = draw(&app);
        assert!(idle.contains("Market Sentiment Analyzer"));
        assert!(idle.contains("Choose a company..."));
        assert!(idle.contains("Industry Sentiment Scores"));

        app.handle_action(Action::SelectNext);
        app.handle_action(Action::SelectNext);
        app.handle_action(Action::Analyze);
        assert_eq!(app.controller().phase(), Phase::Busy);

        let busy = draw(&app);
        assert!(busy.contains("Analyzing..."));
        assert!(busy.contains("Analyzing Microsoft..."));

        let completion = rx.recv().await.unwrap();
        app.apply(completion);
        assert_eq!(app.controller().phase(), Phase::Shown);

        let shown = draw(&app);
        assert!(shown.contains("Microsoft (MSFT)"));
        assert!(shown.contains("Confidence 92%"));
        assert!(shown.contains("Satya Nadella"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reanalysis_while_busy_is_ignored() {
        let (mut app, mut rx) = app();
        app.handle_action(Action::SelectNext);
        app.handle_action(Action::Analyze);
        app.handle_action(Action::SelectNext);
        app.handle_action(Action::Analyze);

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.company(), "Apple Inc");
        app.apply(completion);

        let vm = app.view_model();
        assert_eq!(vm.result.unwrap().company_name, "Apple Inc");
        assert_eq!(vm.selector.selected, Some(1));
    }

    #[test]
    fn test_panic_hook_guard_puts_previous_hook_back() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        std::panic::set_hook(Box::new(|_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }));
        drop(PanicHookGuard::install());

        let joined = std::thread::spawn(|| panic!("after the dashboard")).join();
        let _ = std::panic::take_hook();

        assert!(joined.is_err());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_quit_sets_flag() {
        let (mut app, _rx) = app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
