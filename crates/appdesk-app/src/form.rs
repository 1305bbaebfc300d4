//! Create/edit form state

use appdesk_core::{Application, ApplicationDraft, Performance, KNOWN_DEPARTMENTS};

/// Focusable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Theme,
    Department,
    Performance,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Theme,
        FormField::Department,
        FormField::Performance,
        FormField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Theme => "Theme",
            FormField::Department => "Department",
            FormField::Performance => "Performance",
            FormField::Status => "Status",
        }
    }

    /// Performance and status are picked, not typed
    pub fn is_choice(&self) -> bool {
        matches!(self, FormField::Performance | FormField::Status)
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Draft being edited plus the record it came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ApplicationDraft,
    /// `Some` when editing an existing record
    pub editing_id: Option<i64>,
    pub focus: FormField,
}

impl FormState {
    /// Copy a record into the draft for editing
    pub fn edit(app: &Application) -> Self {
        Self {
            draft: app.to_draft(),
            editing_id: app.id,
            focus: FormField::Name,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit application"
        } else {
            "New application"
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Theme => &self.draft.theme,
            FormField::Department => &self.draft.department,
            FormField::Performance => &self.draft.performance,
            FormField::Status => self.draft.status.as_str(),
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Theme => Some(&mut self.draft.theme),
            FormField::Department => Some(&mut self.draft.department),
            FormField::Performance | FormField::Status => None,
        }
    }

    /// Type into the focused text field; a space on a choice field cycles it
    pub fn input_char(&mut self, c: char) {
        match self.text_mut() {
            Some(text) => text.push(c),
            None if c == ' ' => self.cycle(true),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Step the focused choice. Department steps through the known
    /// departments while still accepting free text.
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            FormField::Performance => {
                self.draft.performance = step_performance(&self.draft.performance, forward)
            }
            FormField::Status => self.draft.status = self.draft.status.toggled(),
            FormField::Department => {
                self.draft.department = step_department(&self.draft.department, forward)
            }
            FormField::Name | FormField::Theme => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

fn step_index(current: Option<usize>, len: usize, forward: bool) -> usize {
    match current {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    }
}

/// Unknown labels snap to the default level
fn step_performance(current: &str, forward: bool) -> String {
    let next = match Performance::parse(current) {
        Some(level) => {
            let i = Performance::ALL.iter().position(|p| *p == level);
            Performance::ALL[step_index(i, Performance::ALL.len(), forward)]
        }
        None => Performance::default(),
    };
    next.label().to_string()
}

fn step_department(current: &str, forward: bool) -> String {
    let current = KNOWN_DEPARTMENTS.iter().position(|d| *d == current);
    KNOWN_DEPARTMENTS[step_index(current, KNOWN_DEPARTMENTS.len(), forward)].to_string()
}
