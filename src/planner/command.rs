//! Segment graph builder and transcoder argument list

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::domain::model::{KeepSegment, RemovalInterval};
use crate::planner::graph::OperationGraph;
use crate::planner::segments::keep_segments;

/// Default video encoder for the concatenated output
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";

/// Default audio encoder for the concatenated output
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// Everything the execution adapter needs to produce the edited asset
#[derive(Debug, Clone, Serialize)]
pub struct RenderPlan {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub segments: Vec<KeepSegment>,
    pub graph: OperationGraph,
    /// Arguments for the transcoder, program name excluded. Paths are kept
    /// byte for byte; only the serialized form is lossy.
    #[serde(serialize_with = "serialize_lossy")]
    pub args: Vec<OsString>,
}

fn serialize_lossy<S: Serializer>(args: &[OsString], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(args.iter().map(|arg| arg.to_string_lossy()))
}

/// Turns a sorted, non-overlapping interval set into a [`RenderPlan`]
#[derive(Debug, Clone)]
pub struct SegmentGraphBuilder {
    video_codec: String,
    audio_codec: String,
}

impl Default for SegmentGraphBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_CODEC, DEFAULT_AUDIO_CODEC)
    }
}

impl SegmentGraphBuilder {
    /// Create a builder emitting the given encoders
    pub fn new(video_codec: impl Into<String>, audio_codec: impl Into<String>) -> Self {
        Self {
            video_codec: video_codec.into(),
            audio_codec: audio_codec.into(),
        }
    }

    /// Build the plan for excising `intervals` from `input`.
    ///
    /// Zero intervals yield a single whole-asset segment. Panics if
    /// `intervals` is unsorted or overlapping.
    pub fn build(&self, input: &Path, output: &Path, intervals: &[RemovalInterval]) -> RenderPlan {
        let segments = keep_segments(intervals);
        let graph = OperationGraph::from_segments(&segments);
        let args = self.arguments(input, output, &graph);

        debug!(
            removed = intervals.len(),
            kept = segments.len(),
            "Built operation graph: {}",
            graph
        );

        RenderPlan {
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            segments,
            graph,
            args,
        }
    }

    fn arguments(&self, input: &Path, output: &Path, graph: &OperationGraph) -> Vec<OsString> {
        vec![
            "-i".into(),
            path_argument(input),
            "-filter_complex".into(),
            graph.to_string().into(),
            "-map".into(),
            graph.video_join().output_pad().into(),
            "-map".into(),
            graph.audio_join().output_pad().into(),
            "-c:v".into(),
            OsString::from(&self.video_codec),
            "-c:a".into(),
            OsString::from(&self.audio_codec),
            // overwrite output file
            "-y".into(),
            path_argument(output),
        ]
    }
}

/// Path as a positional argument; relative paths starting with `-` get a
/// `./` prefix so they are not read as options
fn path_argument(path: &Path) -> OsString {
    let leading_dash = path.as_os_str().to_string_lossy().starts_with('-');
    if path.is_relative() && leading_dash {
        Path::new(".").join(path).into_os_string()
    } else {
        path.as_os_str().to_os_string()
    }
}
