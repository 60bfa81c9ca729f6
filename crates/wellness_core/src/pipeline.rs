//! Orchestrates the three pipeline stages.

use std::sync::Arc;
use std::time::Duration;

use crate::completeness::{CompletenessReport, assess};
use crate::plan::{self, HealthReport};
use crate::profile::HealthProfile;
use crate::scoring::{ScoreBundle, calculate_scores};
use crate::{TextGenerator, WellnessError};

/// Default bound on the narrative-generation call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Sequences assess -> score -> synthesize for a single request.
///
/// Stages run strictly in order; each consumes exactly the shape its
/// predecessor produced, and a stage failure aborts the run without a
/// partial report. All state is per-request, so concurrent runs never
/// interact.
#[derive(Clone)]
pub struct Pipeline {
    generator: Arc<dyn TextGenerator>,
    generation_timeout: Duration,
}

impl Pipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    /// Stage 1: completeness assessment. Total; never fails.
    pub fn assess(&self, profile: HealthProfile) -> CompletenessReport {
        assess(profile)
    }

    /// Stage 2: threshold scoring over the assessed profile.
    pub fn score(&self, report: &CompletenessReport) -> ScoreBundle {
        calculate_scores(report)
    }

    /// Stage 3: narrative synthesis via the text-generation capability.
    pub async fn synthesize(
        &self,
        profile: &HealthProfile,
        bundle: &ScoreBundle,
    ) -> Result<HealthReport, WellnessError> {
        plan::synthesize(self.generator.as_ref(), self.generation_timeout, profile, bundle).await
    }

    /// Run all three stages for one profile.
    pub async fn run(&self, profile: HealthProfile) -> Result<HealthReport, WellnessError> {
        let assessed = self.assess(profile);
        tracing::debug!(
            completeness = assessed.completeness_percent,
            missing = assessed.missing_areas.len(),
            "profile assessed"
        );
        let bundle = self.score(&assessed);
        tracing::debug!(overall = bundle.scores.overall, "scores calculated");
        self.synthesize(&assessed.profile, &bundle).await
    }
}
