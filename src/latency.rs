//! Simulated backend latency and failure channel
//!
//! Every store operation exposed by [`crate::service::TicketService`] is
//! delivered through the simulator: a uniformly random delay first, then
//! exactly one terminal outcome. A lookup miss keeps its `TicketNotFound`
//! classification; any other fault is wrapped into a `Transient` failure
//! carrying the operation-specific message.

use crate::error::{HelpdeskError, Result};
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Default inclusive delay bounds, in milliseconds
pub const DEFAULT_DELAY_MS: RangeInclusive<u64> = 300..=800;

/// Decorates operation results with asynchronous delivery semantics
#[derive(Debug, Clone)]
pub struct LatencySimulator {
    delay_ms: RangeInclusive<u64>,
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl LatencySimulator {
    /// Creates a simulator with inclusive delay bounds in milliseconds
    #[must_use]
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            delay_ms: min_ms..=max_ms,
        }
    }

    /// Creates a simulator that delivers immediately; used in tests
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(0, 0)
    }

    /// Draws the delay for one delivery
    fn draw_delay(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.delay_ms.clone());
        Duration::from_millis(ms)
    }

    /// Delivers one outcome after the random delay
    ///
    /// `failure_message` is the operation-specific text a caller shows
    /// when the underlying computation faulted. `TicketNotFound` is an
    /// expected outcome and passes through unwrapped.
    pub async fn deliver<T>(&self, outcome: Result<T>, failure_message: &str) -> Result<T> {
        let delay = self.draw_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }

        outcome.map_err(|e| {
            if e.is_not_found() {
                return e;
            }
            warn!(error = %e, "operation faulted inside simulated backend");
            HelpdeskError::transient(failure_message)
        })
    }
}
