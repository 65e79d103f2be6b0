//! Profile generator capability
use crate::error::GenerationError;
use async_trait::async_trait;
use roi_core::ProfilePatch;

/// Produces a partial set of business inputs from a free-text description.
///
/// Implementations may call out to a text-generation service; the returned
/// patch must contain whole numbers only.
#[async_trait]
pub trait ProfileGenerator: Send + Sync {
    /// Short name used in logs (e.g. "presets")
    fn name(&self) -> &str;

    async fn generate(&self, description: &str) -> Result<ProfilePatch, GenerationError>;
}
