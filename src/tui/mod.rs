// TUI module for the interactive study timer screen
mod app;
mod events;
mod layout;
mod rendering;

use std::io;

use anyhow::Result;
pub use app::StudyApp;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::planner::Planner;
use crate::store::RecordStore;

/// Run the interactive study screen
pub fn run_study_screen<S: RecordStore>(planner: &Planner<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = StudyApp::new(planner);

    // Run event loop
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
