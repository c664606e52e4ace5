//! Remediation actions
//!
//! The interactive menu offered for a selected repository and the dispatch
//! of each choice to the external git executable or the filesystem. Thin
//! glue by design: it consumes scan results and produces nothing the
//! discovery or classification cores depend on.

pub mod dispatcher;
pub mod error;

pub use dispatcher::{ActionDispatcher, ActionOutcome, RepoAction};
pub use error::{ActionError, ActionResult};
