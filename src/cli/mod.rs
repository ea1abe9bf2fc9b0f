//! Interactive driver for career and sandbox sessions.
//!
//! The engine never prints or reads; this module does both, over generic
//! `BufRead`/`Write` handles so the whole driver is testable against
//! in-memory buffers.

pub mod career;
pub mod sandbox;
pub mod session;

pub use career::run_career;
pub use sandbox::run_sandbox;
pub use session::{run_session, SessionEnd};
