//! Dashboard sections and dropdown filter values

use crate::application::{Status, DEPARTMENT_GLOBAL, DEPARTMENT_LOGISTIQUE, DEPARTMENT_TRANSPORT};

/// Department-scoped dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Unscoped overview (every department)
    #[default]
    Dashboard,
    Transport,
    Logistique,
    Global,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Transport,
        Section::Logistique,
        Section::Global,
    ];

    /// Department this section restricts to; `None` for the overview
    pub fn department(&self) -> Option<&'static str> {
        match self {
            Section::Dashboard => None,
            Section::Transport => Some(DEPARTMENT_TRANSPORT),
            Section::Logistique => Some(DEPARTMENT_LOGISTIQUE),
            Section::Global => Some(DEPARTMENT_GLOBAL),
        }
    }

    /// Page title shown in the header and in exported reports
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Transport => "Transport",
            Section::Logistique => "Logistique",
            Section::Global => "Global",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Section::Dashboard => Section::Transport,
            Section::Transport => Section::Logistique,
            Section::Logistique => Section::Global,
            Section::Global => Section::Dashboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Section::Dashboard => Section::Global,
            Section::Transport => Section::Dashboard,
            Section::Logistique => Section::Transport,
            Section::Global => Section::Logistique,
        }
    }
}

/// Department dropdown filter of the global list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Transport,
    Logistique,
    Global,
}

impl DepartmentFilter {
    pub fn matches(&self, department: &str) -> bool {
        match self.department() {
            None => true,
            Some(wanted) => department == wanted,
        }
    }

    pub fn department(&self) -> Option<&'static str> {
        match self {
            DepartmentFilter::All => None,
            DepartmentFilter::Transport => Some(DEPARTMENT_TRANSPORT),
            DepartmentFilter::Logistique => Some(DEPARTMENT_LOGISTIQUE),
            DepartmentFilter::Global => Some(DEPARTMENT_GLOBAL),
        }
    }

    pub fn label(&self) -> &'static str {
        self.department().unwrap_or("all")
    }

    pub fn cycle(&self) -> Self {
        match self {
            DepartmentFilter::All => DepartmentFilter::Transport,
            DepartmentFilter::Transport => DepartmentFilter::Logistique,
            DepartmentFilter::Logistique => DepartmentFilter::Global,
            DepartmentFilter::Global => DepartmentFilter::All,
        }
    }
}

/// Status dropdown filter of the global list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == Status::Active,
            StatusFilter::Inactive => status == Status::Inactive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Inactive,
            StatusFilter::Inactive => StatusFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_departments() {
        assert_eq!(Section::Dashboard.department(), None);
        assert_eq!(Section::Transport.department(), Some("Transport"));
        assert_eq!(Section::Logistique.department(), Some("Logistique"));
        assert_eq!(Section::Global.department(), Some("Global"));
    }

    #[test]
    fn test_section_cycle_round_trips() {
        for section in Section::ALL {
            assert_eq!(section.next().previous(), section);
        }
        assert_eq!(Section::Global.next(), Section::Dashboard);
    }

    #[test]
    fn test_department_filter_all_is_pass_through() {
        assert!(DepartmentFilter::All.matches("Anything"));
        assert!(DepartmentFilter::All.matches(""));
        assert!(DepartmentFilter::Transport.matches("Transport"));
        assert!(!DepartmentFilter::Transport.matches("transport"));
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.matches(Status::Inactive));
        assert!(StatusFilter::Active.matches(Status::Active));
        assert!(!StatusFilter::Active.matches(Status::Inactive));
        assert_eq!(StatusFilter::Inactive.cycle(), StatusFilter::All);
    }
}
