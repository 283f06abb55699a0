//! Operation graph in ffmpeg `-filter_complex` syntax

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::model::KeepSegment;

/// Which elementary stream a node operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
}

impl StreamKind {
    /// Input pad of the first input file
    pub fn input_pad(&self) -> &'static str {
        match self {
            StreamKind::Video => "[0:v]",
            StreamKind::Audio => "[0:a]",
        }
    }

    fn trim_filter(&self) -> &'static str {
        match self {
            StreamKind::Video => "trim",
            StreamKind::Audio => "atrim",
        }
    }

    fn reset_filter(&self) -> &'static str {
        match self {
            StreamKind::Video => "setpts=PTS-STARTPTS",
            StreamKind::Audio => "asetpts=PTS-STARTPTS",
        }
    }

    fn label_prefix(&self) -> char {
        match self {
            StreamKind::Video => 'v',
            StreamKind::Audio => 'a',
        }
    }

    fn join_label(&self) -> &'static str {
        match self {
            StreamKind::Video => "outv",
            StreamKind::Audio => "outa",
        }
    }

    fn concat_streams(&self) -> &'static str {
        match self {
            StreamKind::Video => "v=1:a=0",
            StreamKind::Audio => "v=0:a=1",
        }
    }
}

/// Extracts one keep segment from one stream and rebases its timestamps to zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimNode {
    pub kind: StreamKind,
    pub index: usize,
    pub segment: KeepSegment,
}

impl TrimNode {
    /// Output label, e.g. `v0` or `a3`
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.label_prefix(), self.index)
    }
}

impl fmt::Display for TrimNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}=start={}",
            self.kind.input_pad(),
            self.kind.trim_filter(),
            self.segment.start.to_filter_value()
        )?;
        if let Some(end) = self.segment.end {
            write!(f, ":end={}", end.to_filter_value())?;
        }
        write!(f, ",{}[{}]", self.kind.reset_filter(), self.label())
    }
}

/// Concatenates trimmed segments of one stream kind in order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinNode {
    pub kind: StreamKind,
    pub inputs: Vec<String>,
}

impl JoinNode {
    pub fn label(&self) -> &'static str {
        self.kind.join_label()
    }

    /// Label in the bracketed form `-map` expects
    pub fn output_pad(&self) -> String {
        format!("[{}]", self.label())
    }
}

impl fmt::Display for JoinNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for input in &self.inputs {
            write!(f, "[{}]", input)?;
        }
        write!(
            f,
            "concat=n={}:{}[{}]",
            self.inputs.len(),
            self.kind.concat_streams(),
            self.label()
        )
    }
}

/// Trim nodes for every keep segment plus the two join nodes.
///
/// Trims are stored in emission order, video before audio for each segment.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationGraph {
    trims: Vec<TrimNode>,
    video_join: JoinNode,
    audio_join: JoinNode,
}

impl OperationGraph {
    /// Wire one video and one audio trim per segment into the joins
    pub fn from_segments(segments: &[KeepSegment]) -> Self {
        let mut trims = Vec::with_capacity(segments.len() * 2);
        let mut video_join = JoinNode {
            kind: StreamKind::Video,
            inputs: Vec::with_capacity(segments.len()),
        };
        let mut audio_join = JoinNode {
            kind: StreamKind::Audio,
            inputs: Vec::with_capacity(segments.len()),
        };

        for (index, segment) in segments.iter().enumerate() {
            for (kind, join) in [
                (StreamKind::Video, &mut video_join),
                (StreamKind::Audio, &mut audio_join),
            ] {
                let node = TrimNode {
                    kind,
                    index,
                    segment: *segment,
                };
                join.inputs.push(node.label());
                trims.push(node);
            }
        }

        Self {
            trims,
            video_join,
            audio_join,
        }
    }

    pub fn trims(&self) -> &[TrimNode] {
        &self.trims
    }

    /// Trim nodes for a single stream kind, in segment order
    pub fn trims_of(&self, kind: StreamKind) -> impl Iterator<Item = &TrimNode> + '_ {
        self.trims.iter().filter(move |node| node.kind == kind)
    }

    pub fn video_join(&self) -> &JoinNode {
        &self.video_join
    }

    pub fn audio_join(&self) -> &JoinNode {
        &self.audio_join
    }

    /// Number of keep segments wired into the graph
    pub fn segment_count(&self) -> usize {
        self.video_join.inputs.len()
    }
}

impl fmt::Display for OperationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.trims {
            write!(f, "{};", node)?;
        }
        write!(f, "{};{}", self.video_join, self.audio_join)
    }
}

impl Serialize for OperationGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeCode;

    fn segments() -> Vec<KeepSegment> {
        vec![
            KeepSegment::bounded(TimeCode::ZERO, TimeCode::from_seconds(10.0)),
            KeepSegment::trailing(TimeCode::from_seconds(20.0)),
        ]
    }

    #[test]
    fn test_trim_node_rendering() {
        let segs = segments();
        let video = TrimNode {
            kind: StreamKind::Video,
            index: 0,
            segment: segs[0],
        };
        assert_eq!(
            video.to_string(),
            "[0:v]trim=start=0.000:end=10.000,setpts=PTS-STARTPTS[v0]"
        );

        let audio = TrimNode {
            kind: StreamKind::Audio,
            index: 1,
            segment: segs[1],
        };
        assert_eq!(
            audio.to_string(),
            "[0:a]atrim=start=20.000,asetpts=PTS-STARTPTS[a1]"
        );
    }

    #[test]
    fn test_graph_text() {
        let graph = OperationGraph::from_segments(&segments());
        assert_eq!(
            graph.to_string(),
            "[0:v]trim=start=0.000:end=10.000,setpts=PTS-STARTPTS[v0];\
             [0:a]atrim=start=0.000:end=10.000,asetpts=PTS-STARTPTS[a0];\
             [0:v]trim=start=20.000,setpts=PTS-STARTPTS[v1];\
             [0:a]atrim=start=20.000,asetpts=PTS-STARTPTS[a1];\
             [v0][v1]concat=n=2:v=1:a=0[outv];\
             [a0][a1]concat=n=2:v=0:a=1[outa]"
        );
    }

    #[test]
    fn test_join_wiring_matches_trims() {
        let graph = OperationGraph::from_segments(&segments());
        assert_eq!(graph.segment_count(), 2);
        assert_eq!(graph.trims().len(), 4);

        for (kind, join) in [
            (StreamKind::Video, graph.video_join()),
            (StreamKind::Audio, graph.audio_join()),
        ] {
            let labels: Vec<String> = graph.trims_of(kind).map(TrimNode::label).collect();
            assert_eq!(labels, join.inputs);
        }
        assert_eq!(graph.video_join().output_pad(), "[outv]");
        assert_eq!(graph.audio_join().output_pad(), "[outa]");
    }

    #[test]
    fn test_graph_serializes_as_text() {
        let graph = OperationGraph::from_segments(&[KeepSegment::trailing(TimeCode::ZERO)]);
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, format!("\"{}\"", graph));
    }
}
