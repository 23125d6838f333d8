use std::sync::Arc;

use crate::adapters::{AppConfig, FfmpegTitleScrubber, FfprobeAdapter};
use crate::app::{BuildPlaylistInteractor, PatchPlaylistInteractor};
use crate::ports::{MediaProbePort, TitleScrubPort};

pub trait AppContainer: Send + Sync {
    fn build_interactor(&self) -> Arc<BuildPlaylistInteractor>;
    fn patch_interactor(&self) -> Arc<PatchPlaylistInteractor>;
}

pub struct DefaultAppContainer {
    build_interactor: Arc<BuildPlaylistInteractor>,
    patch_interactor: Arc<PatchPlaylistInteractor>,
}

impl DefaultAppContainer {
    /// Wire the ffprobe/ffmpeg adapters named in `config`
    pub fn new(config: &AppConfig) -> Self {
        let probe_port = Arc::new(FfprobeAdapter::new(config.tools.ffprobe.clone()));
        let scrub_port = Arc::new(FfmpegTitleScrubber::new(
            config.tools.ffmpeg.clone(),
            config.tools.ffprobe.clone(),
        ));
        Self::with_ports(probe_port, scrub_port)
    }

    /// Wire explicit ports, e.g. fakes in tests
    pub fn with_ports(
        probe_port: Arc<dyn MediaProbePort>,
        scrub_port: Arc<dyn TitleScrubPort>,
    ) -> Self {
        Self {
            build_interactor: Arc::new(BuildPlaylistInteractor::new(probe_port, scrub_port)),
            patch_interactor: Arc::new(PatchPlaylistInteractor::new()),
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn build_interactor(&self) -> Arc<BuildPlaylistInteractor> {
        Arc::clone(&self.build_interactor)
    }

    fn patch_interactor(&self) -> Arc<PatchPlaylistInteractor> {
        Arc::clone(&self.patch_interactor)
    }
}
