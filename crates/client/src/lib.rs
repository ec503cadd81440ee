//! Authenticated REST client for the finance API.
//!
//! Two pieces live here. [`SessionStore`] owns the bearer token pair and the
//! resolved user identity, driving the `Unauthenticated` / `Resolving` /
//! `Authenticated` lifecycle. [`ApiClient`] wraps the collection endpoints
//! and feeds pages one consistent [`Snapshot`] to aggregate over.

pub use api::ApiClient;
pub use error::{ClientError, Result};
pub use session::{Session, SessionStore};
pub use snapshot::{Snapshot, fetch_snapshot};
pub use token_store::{TokenStore, default_store_path};

mod api;
mod error;
mod session;
mod snapshot;
mod token_store;
