//! # appdesk-api - Remote Gateways and Storage
//!
//! Talks to the applications REST API and owns the persisted session.
//!
//! ## Public API
//!
//! - [`ApiClient`] - base URL + bearer-token request plumbing
//! - [`ApplicationsGateway`] / [`HttpApplicationsGateway`] - application CRUD and relance
//! - [`Authenticator`] / [`AuthGateway`] - sign-in and the observable current user
//! - [`Storage`], [`FileStorage`], [`MemoryStorage`] - persisted string keys
//!
//! The gateway traits are declared with `trait_variant` so the app layer can
//! spawn their futures on the tokio runtime and tests can swap in fakes.

pub mod applications;
pub mod auth;
pub mod client;
pub mod protocol;
pub mod storage;

pub use applications::{ApplicationsGateway, HttpApplicationsGateway};
pub use auth::{AuthGateway, Authenticator};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use protocol::{
    ListResponse, RelanceReason, RelanceRequest, RelanceResponse, SignInRequest, SignInResponse,
};
pub use storage::{
    FileStorage, MemoryStorage, Storage, ROLE_KEY, THEME_KEY, TOKEN_KEY, USER_KEY,
};
