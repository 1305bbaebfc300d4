//! appdesk library
//!
//! Startup wiring and the headless runner behind the `appdesk` binary. The
//! dashboard itself lives in the `appdesk-*` workspace crates.

pub mod headless;
pub mod session;

pub use headless::run_headless;
pub use session::{connect, open_storage, stored_session, HttpServices};
