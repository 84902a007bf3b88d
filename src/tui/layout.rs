use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Study screen layout configuration
pub struct StudyLayout {
    pub timer_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl StudyLayout {
    /// Create the study screen layout:
    /// - Timer panel: fixed 7 rows at the top
    /// - Recent sessions: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Timer panel
                Constraint::Min(3),    // Session history (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        Self { timer_area: chunks[0], history_area: chunks[1], status_area: chunks[2] }
    }
}
