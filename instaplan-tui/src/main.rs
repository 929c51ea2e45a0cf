//! Terminal entry point — raw-mode setup, event loop, worker lifecycle.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use instaplan_tui::app::{AppState, ChatMessage, ChatRole, ErrorCategory, ResultsState, Step};
use instaplan_tui::worker::{self, WorkerCommand, WorkerResponse};
use instaplan_tui::{input, persistence, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the
    // panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Paths
    let export_dir = PathBuf::from("exports");
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("instaplan")
        .join("state.json");

    // Load persisted state
    let persisted = persistence::load(&state_path);

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));

    // Spawn worker
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, cancel.clone());

    // Build app state
    let mut app = AppState::new(
        cmd_tx.clone(),
        resp_rx,
        cancel.clone(),
        export_dir,
        state_path.clone(),
    );

    // Apply persisted state
    persistence::apply(&mut app, persisted);

    // Setup terminal. Mouse capture stays enabled for the whole session and
    // is torn down with the alternate screen on every exit path.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::PlanReady { plan, from_cache } => {
            app.generating = false;
            app.plan = Some(plan);
            app.plan_from_cache = from_cache;
            app.results = ResultsState::new();
            app.enter_step(Step::Results);
            if from_cache {
                app.set_status("Plan loaded from cache");
            } else {
                app.set_status("Plan ready");
            }
        }
        WorkerResponse::PlanFailed { error } => {
            app.generating = false;
            let headline = app.strings().gen_error.to_string();
            app.push_error(ErrorCategory::Api, headline, error);
        }
        WorkerResponse::AdvisorReply { text } => {
            app.advisor.waiting = false;
            app.advisor.messages.push(ChatMessage {
                role: ChatRole::Ai,
                text,
            });
        }
        WorkerResponse::AdvisorFailed { error } => {
            app.advisor.waiting = false;
            let headline = app.strings().gen_error.to_string();
            app.advisor.messages.push(ChatMessage {
                role: ChatRole::Ai,
                text: headline.clone(),
            });
            app.push_error(ErrorCategory::Api, headline, error);
        }
    }
}
