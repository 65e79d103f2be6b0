//! Last-write-wins coordination of profile requests.
//!
//! Every request takes a ticket. When a request finishes after a newer
//! one has started, its result is discarded.

use crate::error::GenerationError;
use crate::generator::ProfileGenerator;
use roi_catalog::SliderTable;
use roi_core::ProfilePatch;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Sequence number of one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

pub struct ProfileCoordinator {
    generator: Arc<dyn ProfileGenerator>,
    sliders: &'static SliderTable,
    latest: AtomicU64,
}

impl ProfileCoordinator {
    pub fn new(generator: Arc<dyn ProfileGenerator>) -> Self {
        Self {
            generator,
            sliders: SliderTable::builtin(),
            latest: AtomicU64::new(0),
        }
    }

    /// Start a request, superseding any request still in flight
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Generate a profile for `description`.
    ///
    /// Returns `Ok(None)` when a newer request started while this one was
    /// running. Successful patches are clamped into the slider ranges.
    pub async fn generate(
        &self,
        description: &str,
    ) -> Result<Option<ProfilePatch>, GenerationError> {
        let ticket = self.begin();
        let result = self.generator.generate(description).await;

        if !self.is_current(ticket) {
            tracing::warn!(
                generator = self.generator.name(),
                ticket = ticket.0,
                "discarding superseded profile generation"
            );
            return Ok(None);
        }

        match result {
            Ok(patch) => Ok(Some(self.sliders.clamp_patch(&patch))),
            Err(err) => {
                tracing::warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "profile generation failed"
                );
                Err(err)
            }
        }
    }
}
