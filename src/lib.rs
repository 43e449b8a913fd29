//! GoFinances core — session, identity and ledger logic for the mobile shell.
//!
//! ARCHITECTURE
//! ============
//! The UI shell owns rendering and the identity-provider SDKs. This crate
//! owns everything behind them: the `AuthContext` that decides who is
//! signed in, the key-value `SessionStore` that makes it durable, and the
//! transaction ledger plus the pure aggregations the dashboard and resume
//! screens draw from.
//!
//! Provider SDKs plug in through `identity::IdentityAdapter`; storage plugs
//! in through `storage::SessionStore`. Both are traits so the shell (and
//! tests) can substitute their own.

pub mod auth;
pub mod categories;
pub mod config;
pub mod identity;
pub mod storage;
pub mod transactions;
pub mod user;

pub use auth::{AuthContext, AuthError, AuthState, SignIn};
pub use identity::{AuthRequest, AuthorizationResult, Grant, IdentityAdapter};
pub use storage::SessionStore;
pub use user::User;
