//! Custom widget components

mod app_table;
mod confirm_dialog;
mod form_dialog;
mod header;
mod history_panel;
mod login_view;
pub mod modal_overlay;
mod notice;
mod search_bar;
mod sidebar;
mod stats;

pub use app_table::ApplicationTable;
pub use confirm_dialog::ConfirmDialog;
pub use form_dialog::FormDialog;
pub use header::MainHeader;
pub use history_panel::HistoryPanel;
pub use login_view::LoginView;
pub use notice::NoticeDialog;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use stats::StatsBar;
