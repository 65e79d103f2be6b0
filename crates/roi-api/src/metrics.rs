//! Prometheus counters served on `/metrics`.
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub computations: IntCounter,
    /// Labelled by outcome: ok, superseded, error
    pub profile_generations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let computations = IntCounter::new("roi_computations_total", "ROI reports computed")?;
        let profile_generations = IntCounterVec::new(
            Opts::new("roi_profile_generations_total", "Profile generation requests"),
            &["outcome"],
        )?;

        registry.register(Box::new(computations.clone()))?;
        registry.register(Box::new(profile_generations.clone()))?;

        Ok(Self {
            registry,
            computations,
            profile_generations,
        })
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
