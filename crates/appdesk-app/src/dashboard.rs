//! Dashboard session state and derived views
//!
//! Owns the application collection. Every view is computed on demand from
//! the collection and the current filter inputs; nothing derived is cached.

use chrono::{DateTime, Local};

use appdesk_core::{
    active_applications, average_performance, filtered_applications, format_last_sync,
    inactive_applications, section_applications, unique_departments, Application, HistoryLog,
    ListFilter, Section,
};

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub applications: Vec<Application>,
    pub filter: ListFilter,
    pub section: Section,
    /// Token role or stored role is `admin`
    pub is_admin: bool,
    /// Local mutations since the last refresh
    pub pending_changes: bool,
    /// A refresh cycle is running
    pub refreshing: bool,
    pub last_sync: DateTime<Local>,
    pub history: HistoryLog,
    /// Cursor into [`Self::visible_applications`]
    pub selected: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            applications: Vec::new(),
            filter: ListFilter::default(),
            section: Section::default(),
            is_admin: false,
            pending_changes: false,
            refreshing: false,
            last_sync: Local::now(),
            history: HistoryLog::default(),
            selected: 0,
        }
    }
}

impl DashboardState {
    pub fn new(is_admin: bool) -> Self {
        Self {
            is_admin,
            ..Self::default()
        }
    }

    /// Global list: search AND department dropdown AND status dropdown
    pub fn filtered_applications(&self) -> Vec<&Application> {
        filtered_applications(&self.applications, &self.filter)
    }

    /// Active section's department, then search (dropdowns ignored)
    pub fn section_applications(&self) -> Vec<&Application> {
        section_applications(&self.applications, self.section, &self.filter.search)
    }

    /// Rows shown in the table: the filtered list on the overview, the
    /// section view on a department page
    pub fn visible_applications(&self) -> Vec<&Application> {
        match self.section {
            Section::Dashboard => self.filtered_applications(),
            _ => self.section_applications(),
        }
    }

    pub fn selected_application(&self) -> Option<&Application> {
        self.visible_applications().get(self.selected).copied()
    }

    pub fn average_performance(&self) -> String {
        average_performance(&self.section_applications())
    }

    pub fn unique_departments(&self) -> Vec<String> {
        unique_departments(&self.applications)
    }

    pub fn active_count(&self) -> usize {
        active_applications(&self.applications).len()
    }

    pub fn inactive_count(&self) -> usize {
        inactive_applications(&self.applications).len()
    }

    pub fn page_title(&self) -> &'static str {
        self.section.title()
    }

    pub fn last_sync_label(&self, now: DateTime<Local>) -> String {
        format_last_sync(self.last_sync, now)
    }

    /// Replace the collection wholesale
    pub fn set_applications(&mut self, applications: Vec<Application>) {
        self.applications = applications;
        self.clamp_selection();
    }

    /// Keep the cursor inside the visible rows
    pub fn clamp_selection(&mut self) {
        let len = self.visible_applications().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_applications().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.visible_applications().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
        self.selected = 0;
    }

    pub fn record(&mut self, action: &str, detail: impl Into<String>) {
        self.history.record(action, Some(detail.into()));
    }
}
