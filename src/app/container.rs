use std::sync::Arc;

use crate::adapters::{FfmpegAdapter, Settings};
use crate::app::remove_interactor::RemoveInteractor;
use crate::planner::SegmentGraphBuilder;
use crate::ports::ExecutePort;

pub trait AppContainer: Send + Sync {
    fn remove_interactor(&self) -> Arc<RemoveInteractor>;
}

pub struct DefaultAppContainer {
    remove_interactor: Arc<RemoveInteractor>,
}

impl DefaultAppContainer {
    /// Wire the ffmpeg adapter and builder from resolved settings
    pub fn new(settings: &Settings) -> Self {
        let execute_port = Arc::new(FfmpegAdapter::new(settings.ffmpeg_path.clone()));
        Self::with_execute_port(settings, execute_port)
    }

    /// Same wiring with a caller-supplied execution port
    pub fn with_execute_port(settings: &Settings, execute_port: Arc<dyn ExecutePort>) -> Self {
        let builder = SegmentGraphBuilder::new(&settings.video_codec, &settings.audio_codec);
        let remove_interactor = Arc::new(RemoveInteractor::new(builder, execute_port));

        Self { remove_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn remove_interactor(&self) -> Arc<RemoveInteractor> {
        Arc::clone(&self.remove_interactor)
    }
}
