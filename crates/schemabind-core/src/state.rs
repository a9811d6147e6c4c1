//! Per-run generation state threaded through conflict resolution

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Whether the run may continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Normal,
    /// A strategy asked for the run to stop.
    Stop,
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationStatus::Normal => write!(f, "Normal"),
            GenerationStatus::Stop => write!(f, "Stop"),
        }
    }
}

/// State of a generation run.
///
/// Passed by value into conflict strategies, which return the (possibly
/// updated) state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    status: GenerationStatus,
    processed: BTreeSet<String>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn is_stopped(&self) -> bool {
        self.status == GenerationStatus::Stop
    }

    pub fn request_stop(&mut self) {
        self.status = GenerationStatus::Stop;
    }

    /// Record a class as emitted; returns `false` if it already was.
    pub fn mark_processed(&mut self, class_name: impl Into<String>) -> bool {
        self.processed.insert(class_name.into())
    }

    pub fn is_processed(&self, class_name: &str) -> bool {
        self.processed.contains(class_name)
    }

    /// Emitted class names in sorted order.
    pub fn processed(&self) -> impl Iterator<Item = &str> {
        self.processed.iter().map(String::as_str)
    }
}
