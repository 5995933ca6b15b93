//! lindagrades-session — Authenticated access to the LINDA portal.
//!
//! Implements the log-in handshake, lazy discovery of the per-session
//! `asi` token, and the authenticated fetch of the grade listing.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod session;

pub use config::{create_session, load_config, load_config_from, LindaConfig};
pub use endpoints::Endpoints;
pub use error::SessionError;
pub use session::{Session, SessionBuilder, SessionState};
