//! Offline profile generator backed by a table of business presets.
//!
//! Descriptions are normalized and matched against each preset's
//! keywords; the preset with the most keyword hits wins.

use crate::error::GenerationError;
use crate::generator::ProfileGenerator;
use crate::normalizer::{normalize, words};
use async_trait::async_trait;
use roi_core::{InputField, ProfilePatch};
use serde::Serialize;

/// Typical metrics for one kind of service business
#[derive(Debug, Clone, Serialize)]
pub struct BusinessPreset {
    pub name: &'static str,
    /// Word prefixes that identify this business (e.g. "plumb")
    pub keywords: &'static [&'static str],
    /// Values in `InputField::ALL` order
    pub values: [u32; 7],
}

impl BusinessPreset {
    pub fn patch(&self) -> ProfilePatch {
        let mut patch = ProfilePatch::default();
        for (field, value) in InputField::ALL.into_iter().zip(self.values) {
            patch.set(field, value);
        }
        patch
    }

    fn hits(&self, words: &[&str]) -> usize {
        self.keywords
            .iter()
            .filter(|k| words.iter().any(|w| w.starts_with(*k)))
            .count()
    }
}

const PRESETS: &[BusinessPreset] = &[
    BusinessPreset {
        name: "auto detailing",
        keywords: &["detail", "car", "auto", "wash", "vehicle"],
        values: [60, 180, 5, 25, 8, 12, 60],
    },
    BusinessPreset {
        name: "plumbing",
        keywords: &["plumb", "pipe", "drain", "hvac", "heating", "boiler"],
        values: [90, 350, 8, 35, 15, 8, 70],
    },
    BusinessPreset {
        name: "salon",
        keywords: &["salon", "hair", "barber", "spa", "nail", "beauty"],
        values: [220, 70, 10, 20, 20, 15, 75],
    },
    BusinessPreset {
        name: "cleaning",
        keywords: &["clean", "maid", "janitor", "housekeep"],
        values: [70, 160, 6, 22, 10, 10, 60],
    },
    BusinessPreset {
        name: "landscaping",
        keywords: &["landscap", "lawn", "garden", "tree", "yard", "mow"],
        values: [45, 250, 4, 25, 9, 6, 55],
    },
];

pub struct PresetGenerator {
    presets: Vec<BusinessPreset>,
}

impl PresetGenerator {
    pub fn new() -> Self {
        Self {
            presets: PRESETS.to_vec(),
        }
    }

    pub fn with_presets(presets: Vec<BusinessPreset>) -> Self {
        Self { presets }
    }

    pub fn presets(&self) -> &[BusinessPreset] {
        &self.presets
    }

    /// Best-matching preset, first one wins on ties
    pub fn best_match(&self, description: &str) -> Option<&BusinessPreset> {
        let normalized = normalize(description);
        let words = words(&normalized);

        let mut best: Option<(&BusinessPreset, usize)> = None;
        for preset in &self.presets {
            let hits = preset.hits(&words);
            if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
                best = Some((preset, hits));
            }
        }
        best.map(|(preset, _)| preset)
    }
}

impl Default for PresetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileGenerator for PresetGenerator {
    fn name(&self) -> &str {
        "presets"
    }

    async fn generate(&self, description: &str) -> Result<ProfilePatch, GenerationError> {
        let preset = self
            .best_match(description)
            .ok_or_else(|| GenerationError::NoMatch(description.trim().to_string()))?;
        tracing::debug!(preset = preset.name, "matched business preset");
        Ok(preset.patch())
    }
}
