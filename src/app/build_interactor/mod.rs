// Build interactor - Orchestrates the chapters-to-playlist use case

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::fallback_title;
use crate::ports::*;
use crate::utils::path::built_playlist_path;
use crate::xspf::{assemble_playlist, TrackBuilder};

/// Interactor for building a playlist from a video's chapters
pub struct BuildPlaylistInteractor {
    probe_port: Arc<dyn MediaProbePort>,
    scrub_port: Arc<dyn TitleScrubPort>,
}

impl BuildPlaylistInteractor {
    /// Create new build interactor with injected ports
    pub fn new(probe_port: Arc<dyn MediaProbePort>, scrub_port: Arc<dyn TitleScrubPort>) -> Self {
        Self {
            probe_port,
            scrub_port,
        }
    }

    /// Probe the video, write `<stem> - PLAYLIST.xspf` beside it, then
    /// either clear the video's title or, in tree mode, leave it alone
    pub fn execute(&self, request: &BuildRequest) -> DomainResult<BuildReport> {
        let video = request.video_path.as_path();
        if !video.is_file() {
            return Err(DomainError::FileNotFound(video.display().to_string()));
        }

        info!(video = %video.display(), tree = request.tree, "Building playlist");

        let title = match self.probe_port.title(video)? {
            Some(title) => title,
            None => {
                let title = fallback_title(video);
                warn!(title = %title, "No title tag in container, using file name");
                title
            }
        };

        let chapters = self.probe_port.chapters(video)?;
        let builder = TrackBuilder::new(video);
        let tracks = chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| builder.build_track(chapter, index))
            .collect();

        let document = assemble_playlist(&title, tracks, request.tree);
        let output_path = built_playlist_path(video);
        document.write_file(&output_path)?;
        info!(
            output = %output_path.display(),
            tracks = chapters.len(),
            "Playlist written"
        );

        // tree mode exists so the video's own metadata can stay as it is
        let title_scrubbed = if request.tree {
            false
        } else {
            self.scrub_port.strip_title(video)?;
            true
        };

        Ok(BuildReport {
            output_path,
            title,
            track_count: chapters.len(),
            title_scrubbed,
        })
    }
}
