//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width including borders
pub const SIDEBAR_WIDTH: u16 = 22;

/// History panel height including borders
const HISTORY_HEIGHT: u16 = 8;

/// Screen areas for the dashboard
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    /// Title, page, user and sync status
    pub header: Rect,
    /// Section navigation
    pub sidebar: Rect,
    /// Counters and average performance
    pub stats: Rect,
    /// Search term and dropdown filters
    pub filters: Rect,
    /// Applications table
    pub table: Rect,
    /// Recent actions
    pub history: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Split the screen into the dashboard regions.
///
/// The history panel collapses first when the terminal is short.
pub fn dashboard(area: Rect) -> DashboardAreas {
    let history_height = if area.height >= 24 { HISTORY_HEIGHT } else { 0 };

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[1]);

    let main = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(history_height),
    ])
    .split(columns[1]);

    DashboardAreas {
        header: rows[0],
        sidebar: columns[0],
        stats: main[0],
        filters: main[1],
        table: main[2],
        history: main[3],
        footer: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout_standard() {
        let layout = dashboard(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.history.height, HISTORY_HEIGHT);
        // 30 - header(3) - footer(1) - stats(3) - filters(3) - history(8)
        assert_eq!(layout.table.height, 12);
    }

    #[test]
    fn test_history_collapses_on_short_terminal() {
        let layout = dashboard(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.history.height, 0);
        assert!(layout.table.height >= 3);
    }

    #[test]
    fn test_main_column_is_contiguous() {
        let layout = dashboard(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.stats.x, SIDEBAR_WIDTH);
        assert_eq!(layout.filters.y, layout.stats.y + layout.stats.height);
        assert_eq!(layout.table.y, layout.filters.y + layout.filters.height);
        assert_eq!(layout.history.y, layout.table.y + layout.table.height);
    }
}
