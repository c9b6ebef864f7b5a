//! Per-step, per-host and per-run results.
//!
//! Results are collected for reporting only; the orchestrator never reads
//! them to decide whether the next step runs.

use serde::Serialize;

use crate::domain::error::StepError;
use crate::domain::step::Step;
use crate::domain::target::Target;

/// Result of one step against one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub ok: bool,
    /// HTTP status of the mutating request, when one was answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw response body, surfaced for manual verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub message: String,
}

impl StepOutcome {
    /// Outcome of an answered request. Any 2xx counts as success.
    #[must_use]
    pub fn answered(step: Step, status: u16, body: String) -> Self {
        let ok = (200..300).contains(&status);
        let message = if ok {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status} (password not changed)")
        };
        Self {
            step,
            ok,
            status: Some(status),
            body: Some(body),
            message,
        }
    }

    /// Outcome of a step that produced no usable response.
    #[must_use]
    pub fn failed(step: Step, error: &StepError) -> Self {
        Self {
            step,
            ok: false,
            status: None,
            body: None,
            message: error.to_string(),
        }
    }
}

/// All step outcomes for one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    pub target: Target,
    pub steps: Vec<StepOutcome>,
    /// Set when the host could not be connected to; remaining steps were skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreachable: Option<String>,
}

impl HostReport {
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            target,
            steps: Vec::new(),
            unreachable: None,
        }
    }

    /// Every step ran and succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.unreachable.is_none()
            && self.steps.len() == Step::ORDER.len()
            && self.steps.iter().all(|s| s.ok)
    }
}

/// Results of a whole run, in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub hosts: Vec<HostReport>,
}

impl RunReport {
    /// Number of hosts on which every step succeeded.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.hosts.iter().filter(|h| h.is_success()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.hosts.len()
    }
}
