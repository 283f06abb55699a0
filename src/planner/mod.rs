//! Segment graph building
//!
//! Turns the removal intervals of an [`IntervalStore`](crate::domain::store::IntervalStore)
//! snapshot into keep segments, an ffmpeg filter graph wiring trim and concat
//! nodes together, and the argument list that runs it.

pub mod command;
pub mod graph;
pub mod segments;

pub use command::{RenderPlan, SegmentGraphBuilder, DEFAULT_AUDIO_CODEC, DEFAULT_VIDEO_CODEC};
pub use graph::{JoinNode, OperationGraph, StreamKind, TrimNode};
pub use segments::keep_segments;
