//! Sequential measurement of every scenario in a registry.

use noisebench_core::Registry;

use crate::config::{ConfigError, MeasureConfig};
use crate::error::MeasureError;
use crate::measure::{measure, Measurement};

/// What the harness does when a scenario fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run and return the failure. Earlier results are discarded.
    #[default]
    Abort,
    /// Record the failure and move on to the next scenario.
    Continue,
}

/// Result of one scenario within a harness run.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioOutcome {
    /// The scenario completed both phases.
    Measured(Measurement),
    /// The scenario failed; only produced under [`FailurePolicy::Continue`].
    Failed {
        /// Scenario label.
        label: String,
        /// Why it failed.
        error: MeasureError,
    },
}

impl ScenarioOutcome {
    /// Label of the scenario this outcome belongs to.
    pub fn label(&self) -> &str {
        match self {
            Self::Measured(m) => m.raw.label(),
            Self::Failed { label, .. } => label,
        }
    }

    /// The measurement, if the scenario succeeded.
    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            Self::Measured(m) => Some(m),
            Self::Failed { .. } => None,
        }
    }
}

/// Runs registered scenarios one after another under a shared config.
///
/// Scenarios never overlap: each one gets the whole machine for its
/// warm-up and timed phases.
#[derive(Clone, Debug)]
pub struct Harness {
    config: MeasureConfig,
    policy: FailurePolicy,
}

impl Harness {
    /// Create a harness, validating `config` up front.
    pub fn new(config: MeasureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            policy: FailurePolicy::default(),
        })
    }

    /// Set the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The measurement configuration.
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// The failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Measure every scenario in registration order.
    ///
    /// Outcomes come back in the same order as the registry. Under
    /// [`FailurePolicy::Abort`] the first failure is returned and no
    /// further scenario runs.
    pub fn run(&self, registry: &mut Registry) -> Result<Vec<ScenarioOutcome>, MeasureError> {
        let total = registry.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, (label, workload)) in registry.iter_mut().enumerate() {
            tracing::info!(
                scenario = label,
                index = index + 1,
                total,
                duration_ms = self.config.duration_millis(),
                "measuring"
            );
            match measure(label, workload, &self.config) {
                Ok(m) => {
                    tracing::debug!(
                        scenario = label,
                        iterations = m.raw.iteration_count(),
                        elapsed_ms = m.raw.elapsed_millis(),
                        stop = ?m.stop,
                        "measured"
                    );
                    outcomes.push(ScenarioOutcome::Measured(m));
                }
                Err(error) => match self.policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Continue => {
                        tracing::warn!(scenario = label, %error, "scenario failed, continuing");
                        outcomes.push(ScenarioOutcome::Failed {
                            label: label.to_string(),
                            error,
                        });
                    }
                },
            }
        }
        Ok(outcomes)
    }
}
