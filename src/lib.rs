//! Chunk Remover Library
//!
//! Keeps a validated set of time ranges to cut out of a video and turns it
//! into an ffmpeg `filter_complex` graph that trims the kept segments and
//! concatenates them with audio and video in sync.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{IntervalId, KeepSegment, RemovalInterval, TimeCode};
pub use domain::store::IntervalStore;
pub use error::{RemoverError, RemoverResult};
pub use planner::{RenderPlan, SegmentGraphBuilder};
