//! The state type handlers extract.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// What every handler gets via `State`: the [`AxumContext`] behind an
/// `Arc`, carrying the core facade plus the request-independent server
/// facts (environment, start time) the health endpoint reports.
pub type AppState = Arc<AxumContext>;
