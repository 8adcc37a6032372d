//! Health probe DTO.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bootstrap::Environment;

/// Response body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Whole seconds since server start.
    pub uptime: u64,
    pub environment: String,
}

impl HealthDto {
    /// Snapshot the server's health at the current instant.
    pub fn now(started_at: Instant, environment: Environment) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
            uptime: started_at.elapsed().as_secs(),
            environment: environment.to_string(),
        }
    }
}
