//! # appdesk-core - Core Domain Types
//!
//! Foundation crate for appdesk. Provides the application/user domain types,
//! the pure derived views the dashboard renders, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, base64).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Application`], [`ApplicationDraft`], [`ApplicationPatch`] - managed records
//! - [`Status`], [`Performance`] - record status and the ordered performance scale
//! - [`User`], [`Role`], [`UserDepartment`] - authenticated user
//! - [`Section`], [`DepartmentFilter`], [`StatusFilter`] - dashboard scoping
//!
//! ### Derived Views (`filter`, `stats`)
//! - [`filtered_applications()`] - search AND department AND status
//! - [`section_applications()`] - section scope then search
//! - [`average_performance()`] - bucketed mean performance label
//!
//! ### Session Helpers
//! - [`HistoryLog`] - newest-first log capped at [`HISTORY_CAPACITY`]
//! - [`format_last_sync()`] - relative "last synchronised" label
//! - [`role_from_token()`] - optimistic JWT role claim
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod application;
pub mod error;
pub mod filter;
pub mod history;
pub mod logging;
pub mod section;
pub mod stats;
pub mod sync_time;
pub mod token;
pub mod user;

/// Prelude for common imports used throughout all appdesk crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use application::{
    Application, ApplicationDraft, ApplicationPatch, Performance, Status, DEPARTMENT_GLOBAL,
    DEPARTMENT_LOGISTIQUE, DEPARTMENT_TRANSPORT, KNOWN_DEPARTMENTS,
};
pub use error::{Error, Result};
pub use filter::{
    active_applications, filtered_applications, inactive_applications, matches_search,
    section_applications, unique_departments, ListFilter,
};
pub use history::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use section::{DepartmentFilter, Section, StatusFilter};
pub use stats::{average_performance, mean_score, NO_PERFORMANCE_PLACEHOLDER};
pub use sync_time::format_last_sync;
pub use token::role_from_token;
pub use user::{Role, User, UserDepartment};
