//! Analysis session lifecycle.
//!
//! This crate owns the request/response lifecycle between the user's input
//! and the rendered findings:
//!
//! - [`validate`]: local input checks, run before any network activity
//! - [`Session`]: the state machine over [`SessionState`] — exactly one of
//!   idle / loading / succeeded / failed is active at any time
//! - [`present`]: derives a display-ready [`ViewModel`] from the current
//!   state
//!
//! The machine never performs IO itself: [`Session::analyze_requested`]
//! hands the caller the request to dispatch, and the caller reports the
//! outcome back through [`Session::settle`]. One analysis may be in flight
//! at a time; triggers while loading are ignored.

pub mod present;
pub mod session;
pub mod validate;

pub use present::{present, ReportView, ViewModel};
pub use session::{Session, SessionFailure, SessionState};
pub use validate::{validate, ValidationOutcome, EMPTY_CODE_MESSAGE, MAX_LINES};
