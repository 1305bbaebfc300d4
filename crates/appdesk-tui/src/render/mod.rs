//! Main render/view function (View in TEA pattern)


use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use appdesk_app::state::{AppState, UiMode};
use appdesk_core::Section;

use super::{layout, widgets};
use crate::theme::{for_theme, styles, Palette};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: everything shown is derived from `state` on each frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = for_theme(state.theme);

    let bg_block = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg_block, area);

    if state.ui_mode == UiMode::Login {
        frame.render_widget(widgets::LoginView::new(&state.login, palette), area);
        return;
    }

    render_dashboard(frame, state, palette, area);

    // Modal overlays
    let form_open = state.ui_mode == UiMode::Form
        || (state.ui_mode == UiMode::Notice && state.previous_mode == UiMode::Form);
    if form_open {
        frame.render_widget(widgets::FormDialog::new(&state.form, palette), area);
    }

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(ref dialog_state) = state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog_state, palette), area);
        }
    }

    if state.ui_mode == UiMode::Notice {
        if let Some(ref text) = state.notice {
            frame.render_widget(widgets::NoticeDialog::new(text, palette), area);
        }
    }
}

fn render_dashboard(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let dashboard = &state.dashboard;
    let areas = layout::dashboard(area);

    let header = widgets::MainHeader::new(dashboard.page_title(), palette)
        .user(state.user.as_ref(), dashboard.is_admin)
        .sync(
            dashboard.last_sync_label(Local::now()),
            dashboard.refreshing,
            dashboard.pending_changes,
        );
    frame.render_widget(header, areas.header);

    frame.render_widget(
        widgets::Sidebar::new(dashboard.section, palette),
        areas.sidebar,
    );

    frame.render_widget(
        widgets::StatsBar {
            total: dashboard.applications.len(),
            active: dashboard.active_count(),
            inactive: dashboard.inactive_count(),
            departments: dashboard.unique_departments().len(),
            average: dashboard.average_performance(),
            palette,
        },
        areas.stats,
    );

    let on_overview = dashboard.section == Section::Dashboard;
    frame.render_widget(
        widgets::SearchBar::new(&dashboard.filter, palette)
            .editing(state.ui_mode == UiMode::SearchInput)
            .dropdowns_active(on_overview),
        areas.filters,
    );

    let rows = dashboard.visible_applications();
    let title = if on_overview {
        "Applications"
    } else {
        dashboard.page_title()
    };
    frame.render_widget(
        widgets::ApplicationTable::new(&rows, palette)
            .selected(dashboard.selected)
            .title(title),
        areas.table,
    );

    if areas.history.height > 0 {
        frame.render_widget(
            widgets::HistoryPanel::new(&dashboard.history, palette),
            areas.history,
        );
    }

    frame.render_widget(footer(state, palette), areas.footer);
}

/// Key hints for the current mode
fn footer<'a>(state: &AppState, p: &Palette) -> Paragraph<'a> {
    let hints: &[(&str, &str)] = match state.ui_mode {
        UiMode::SearchInput => &[("Enter/Esc", "done"), ("^U", "clear")],
        UiMode::Form => &[("Enter", "save"), ("Esc", "cancel")],
        UiMode::ConfirmDialog => &[("y", "confirm"), ("n", "cancel")],
        UiMode::Notice => &[("Enter", "dismiss")],
        _ if state.dashboard.is_admin => &[
            ("1-4", "section"),
            ("/", "search"),
            ("f/a/c", "filters"),
            ("n", "new"),
            ("e", "edit"),
            ("s", "status"),
            ("d", "delete"),
            ("r", "refresh"),
            ("x", "export"),
            ("t", "theme"),
            ("L", "logout"),
            ("q", "quit"),
        ],
        _ => &[
            ("1-4", "section"),
            ("/", "search"),
            ("f/a/c", "filters"),
            ("r", "refresh"),
            ("x", "export"),
            ("t", "theme"),
            ("L", "logout"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), styles::keybinding(p)));
        spans.push(Span::styled(format!(" {}  ", label), styles::text_muted(p)));
    }
    Paragraph::new(Line::from(spans))
}
