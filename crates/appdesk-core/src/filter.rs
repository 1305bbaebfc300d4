//! Derived application views
//!
//! Two filter entry points exist and they intentionally differ:
//! - [`filtered_applications`] applies search AND department AND status.
//! - [`section_applications`] applies the section's department, then search.
//!   The department/status dropdowns never affect section views.

use std::collections::HashSet;

use crate::application::{Application, Status};
use crate::section::{DepartmentFilter, Section, StatusFilter};

/// Current filter inputs of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: String,
    pub department: DepartmentFilter,
    pub status: StatusFilter,
}

impl ListFilter {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Normalised search term: trimmed and lower-cased
fn normalise(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring match over name, theme and department.
///
/// `term` must already be normalised; an empty term matches everything.
fn matches_term(app: &Application, term: &str) -> bool {
    term.is_empty()
        || app.name.to_lowercase().contains(term)
        || app.theme.to_lowercase().contains(term)
        || app.department.to_lowercase().contains(term)
}

/// Search match against a raw (unnormalised) user search term
pub fn matches_search(app: &Application, search: &str) -> bool {
    matches_term(app, &normalise(search))
}

/// Global list: search AND department dropdown AND status dropdown
pub fn filtered_applications<'a>(
    apps: &'a [Application],
    filter: &ListFilter,
) -> Vec<&'a Application> {
    let term = normalise(&filter.search);
    apps.iter()
        .filter(|app| {
            matches_term(app, &term)
                && filter.department.matches(&app.department)
                && filter.status.matches(app.status)
        })
        .collect()
}

/// Section view: section department restriction, then search only
pub fn section_applications<'a>(
    apps: &'a [Application],
    section: Section,
    search: &str,
) -> Vec<&'a Application> {
    let term = normalise(search);
    apps.iter()
        .filter(|app| match section.department() {
            None => true,
            Some(department) => app.department == department,
        })
        .filter(|app| matches_term(app, &term))
        .collect()
}

/// Distinct departments in first-seen order
pub fn unique_departments(apps: &[Application]) -> Vec<String> {
    let mut seen = HashSet::new();
    apps.iter()
        .filter(|app| seen.insert(app.department.as_str()))
        .map(|app| app.department.clone())
        .collect()
}

pub fn active_applications(apps: &[Application]) -> Vec<&Application> {
    apps.iter().filter(|a| a.status == Status::Active).collect()
}

pub fn inactive_applications(apps: &[Application]) -> Vec<&Application> {
    apps.iter().filter(|a| a.status == Status::Inactive).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: i64, name: &str, theme: &str, department: &str, status: Status) -> Application {
        Application {
            id: Some(id),
            name: name.to_string(),
            theme: theme.to_string(),
            performance: "Bon".to_string(),
            department: department.to_string(),
            status,
            created_at: None,
        }
    }

    fn fixture() -> Vec<Application> {
        vec![
            app(1, "Transport Manager", "Transport", "Logistique", Status::Active),
            app(2, "TrackIt", "Suivi", "Global", Status::Active),
            app(3, "Fleet Board", "Flotte", "Transport", Status::Inactive),
            app(4, "Stock", "Entrepot", "Logistique", Status::Inactive),
        ]
    }

    fn ids(apps: &[&Application]) -> Vec<i64> {
        apps.iter().filter_map(|a| a.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let apps = fixture();
        let result = filtered_applications(&apps, &ListFilter::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let apps = fixture();
        let by_name = ListFilter {
            search: "  TRACKIT ".into(),
            ..ListFilter::default()
        };
        assert_eq!(ids(&filtered_applications(&apps, &by_name)), vec![2]);

        let by_theme = ListFilter {
            search: "flotte".into(),
            ..ListFilter::default()
        };
        assert_eq!(ids(&filtered_applications(&apps, &by_theme)), vec![3]);

        // "transport" hits app 1 by name/theme and app 3 by department
        let by_department = ListFilter {
            search: "transport".into(),
            ..ListFilter::default()
        };
        assert_eq!(ids(&filtered_applications(&apps, &by_department)), vec![1, 3]);
    }

    #[test]
    fn test_all_three_predicates_are_conjunctive() {
        let apps = fixture();
        let filter = ListFilter {
            search: String::new(),
            department: DepartmentFilter::Logistique,
            status: StatusFilter::Inactive,
        };
        assert_eq!(ids(&filtered_applications(&apps, &filter)), vec![4]);
    }

    #[test]
    fn test_section_view_ignores_dropdown_filters() {
        let apps = fixture();
        // Dropdowns are not inputs of the section view at all
        let result = section_applications(&apps, Section::Logistique, "");
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_section_view_applies_search_after_scope() {
        let apps = fixture();
        assert_eq!(ids(&section_applications(&apps, Section::Logistique, "stock")), vec![4]);
        assert_eq!(ids(&section_applications(&apps, Section::Dashboard, "t")), vec![1, 2, 3, 4]);
        assert!(section_applications(&apps, Section::Global, "fleet").is_empty());
    }

    #[test]
    fn test_section_and_global_views_differ_for_same_inputs() {
        let apps = fixture();
        let filter = ListFilter {
            search: String::new(),
            department: DepartmentFilter::All,
            status: StatusFilter::Active,
        };
        assert_eq!(ids(&filtered_applications(&apps, &filter)), vec![1, 2]);
        assert_eq!(
            ids(&section_applications(&apps, Section::Dashboard, &filter.search)),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_unique_departments_first_seen_order() {
        let apps = fixture();
        assert_eq!(
            unique_departments(&apps),
            vec!["Logistique", "Global", "Transport"]
        );
    }

    #[test]
    fn test_active_inactive_partition() {
        let apps = fixture();
        assert_eq!(ids(&active_applications(&apps)), vec![1, 2]);
        assert_eq!(ids(&inactive_applications(&apps)), vec![3, 4]);
    }
}
