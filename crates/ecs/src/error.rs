//! Error types for world access and schedule construction.

use thiserror::Error;

use crate::schedule::Stage;

/// Raised while reading or committing world state.
///
/// Every variant indicates a wiring defect (a rule ran before start-up populated
/// the world), so callers are expected to propagate it rather than recover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("resource `{0}` is not present; was the start-up stage applied?")]
    MissingResource(&'static str),
}

/// Raised by [`SystemGraph::build`](crate::SystemGraph::build) for an invalid graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("system `{0}` is registered more than once")]
    DuplicateSystem(&'static str),
    #[error("dependency refers to unregistered system `{0}`")]
    UnknownSystem(&'static str),
    #[error("system `{system}` ({system_stage:?}) cannot run after `{after}` ({after_stage:?})")]
    CrossStage {
        system: &'static str,
        system_stage: Stage,
        after: &'static str,
        after_stage: Stage,
    },
    #[error("dependency cycle between systems {0:?}")]
    Cycle(Vec<&'static str>),
}
