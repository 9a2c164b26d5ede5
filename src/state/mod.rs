//! State Management
//!
//! Session context shared across pages.

pub mod session;

pub use session::{provide_session_state, use_session, SessionState};
